//! Full-screen terminal interface for Animal Chess.
//!
//! Built on ratatui; cells can be clicked with the mouse or selected with
//! the keyboard cursor.

use animal_chess_core::Side;

mod app;
mod event;
mod render;
mod widgets;

use app::App;

/// Runs the TUI until the user quits.
pub fn run(first: Side) -> Result<(), String> {
    let app = App::new(first);

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();

    result.map_err(|e| e.to_string())
}
