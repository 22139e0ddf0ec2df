//! Application state and main loop for the TUI.

use std::time::Duration;

use animal_chess_core::{
    Dispatch, GameError, Side, Square, Surface,
    square::{FILES, RANKS},
};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::game::{self, CliGame};

use super::event::{self, BoardArea, Event};
use super::render;

/// UI mode for handling different interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal game play mode
    Normal,
    /// Confirming quit
    ConfirmQuit,
}

/// Main application state.
pub struct App {
    /// Current game
    pub game: CliGame,
    /// Side that moves first in every new game
    first: Side,
    /// Current UI mode
    pub ui_mode: UiMode,
    /// Cursor position on the board as (rank, file)
    pub cursor: (usize, usize),
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
    board_area: BoardArea,
}

impl App {
    /// Creates a new App instance.
    pub fn new(first: Side) -> Self {
        Self {
            game: game::new_game(first),
            first,
            ui_mode: UiMode::Normal,
            cursor: (1, 1),
            should_quit: false,
            status_message: None,
            board_area: BoardArea::default(),
        }
    }

    /// Runs the main TUI loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)?;

        loop {
            terminal.draw(|frame| render::render(frame, &self))?;

            if let Some(event) = event::poll_event(Duration::from_millis(100))? {
                self.handle_event(event);
            }

            if self.should_quit {
                break;
            }
        }

        crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture)?;

        Ok(())
    }

    /// Returns the square under the cursor.
    pub fn cursor_square(&self) -> Option<Square> {
        Square::from_file_rank(self.cursor.1, self.cursor.0)
    }

    /// Handles an input event.
    fn handle_event(&mut self, event: Event) {
        match self.ui_mode {
            UiMode::Normal => self.handle_normal_event(event),
            UiMode::ConfirmQuit => self.handle_confirm_quit_event(event),
        }
    }

    /// Handles events in normal game mode.
    fn handle_normal_event(&mut self, event: Event) {
        match event {
            Event::ForceQuit => {
                self.should_quit = true;
            }
            Event::Quit => {
                self.ui_mode = UiMode::ConfirmQuit;
            }
            Event::CursorUp => {
                self.cursor.0 = self.cursor.0.saturating_sub(1);
            }
            Event::CursorDown => {
                if self.cursor.0 < RANKS - 1 {
                    self.cursor.0 += 1;
                }
            }
            Event::CursorLeft => {
                self.cursor.1 = self.cursor.1.saturating_sub(1);
            }
            Event::CursorRight => {
                if self.cursor.1 < FILES - 1 {
                    self.cursor.1 += 1;
                }
            }
            Event::Select => {
                if let Some(sq) = self.cursor_square() {
                    let surface = Surface::Cell(self.game.board().handle(sq));
                    self.dispatch(surface);
                }
            }
            Event::Click { column, row } => {
                let surface = self
                    .board_area
                    .surface_at(self.game.board(), column, row);
                if let Some(sq) = self.board_area.square_at(column, row) {
                    self.cursor = (sq.rank(), sq.file());
                }
                self.dispatch(surface);
            }
            Event::NewGame => {
                self.new_game();
            }
            Event::Char(_) => {}
        }
    }

    /// Handles events in quit confirmation mode.
    fn handle_confirm_quit_event(&mut self, event: Event) {
        match event {
            Event::ForceQuit | Event::Char('y') | Event::Char('Y') => {
                self.should_quit = true;
            }
            Event::Char('n') | Event::Char('N') | Event::NewGame | Event::Quit => {
                self.ui_mode = UiMode::Normal;
            }
            _ => {}
        }
    }

    /// Delivers an input surface to the game and reports the outcome.
    fn dispatch(&mut self, surface: Surface) {
        debug!(?surface, "dispatching click");
        self.status_message = match self.game.dispatch(surface) {
            Ok(Dispatch::Moved(record)) => Some(match record.killed {
                Some(killed) => format!(
                    "{} {} takes {killed} on {}",
                    record.side, record.piece, record.to
                ),
                None => format!(
                    "{} {} {} -> {}",
                    record.side, record.piece, record.from, record.to
                ),
            }),
            Ok(Dispatch::Selected(_)) => None,
            Ok(Dispatch::Idle) => Some("Select one of your pieces first".to_string()),
            Ok(Dispatch::Ignored) if self.game.is_over() => {
                Some("Game is over! Press N for a new game".to_string())
            }
            Ok(Dispatch::Ignored) => self.status_message.take(),
            Err(GameError::GameOver) => Some("Game is over! Press N for a new game".to_string()),
            Err(err) => Some(err.to_string()),
        };
    }

    /// Starts a new game.
    fn new_game(&mut self) {
        self.game = game::new_game(self.first);
        self.cursor = (1, 1);
        self.status_message = Some("New game started".to_string());
        info!(first = %self.first, "new game");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animal_chess_core::{GameStatus, PieceKind};

    fn click_square(app: &mut App, sq: Square) {
        let area = BoardArea::default();
        app.handle_event(Event::Click {
            column: area.start_col + sq.file() as u16 * area.cell_width + 1,
            row: area.start_row + sq.rank() as u16 * area.cell_height,
        });
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = App::new(Side::Upper);
        for _ in 0..10 {
            app.handle_event(Event::CursorDown);
            app.handle_event(Event::CursorRight);
        }
        assert_eq!(app.cursor, (3, 2));
        assert_eq!(app.cursor_square(), Some(Square::C4));

        for _ in 0..10 {
            app.handle_event(Event::CursorUp);
            app.handle_event(Event::CursorLeft);
        }
        assert_eq!(app.cursor, (0, 0));
        assert_eq!(app.cursor_square(), Some(Square::A1));
    }

    #[test]
    fn test_select_with_keyboard() {
        let mut app = App::new(Side::Upper);
        // Cursor starts on b2, the upper chick.
        app.handle_event(Event::Select);
        assert_eq!(app.game.selected(), Some(Square::B2));

        app.handle_event(Event::CursorDown);
        app.handle_event(Event::Select);
        assert_eq!(app.game.turn(), 1);
        assert_eq!(app.game.dead_zone(Side::Upper).len(), 1);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_mouse_move() {
        let mut app = App::new(Side::Upper);
        click_square(&mut app, Square::C1);
        click_square(&mut app, Square::C2);

        assert_eq!(app.cursor, (1, 2));
        assert_eq!(app.game.side_to_move(), Side::Lower);
        assert_eq!(
            app.game.board().cell_at(Square::C2).piece().map(|p| p.kind()),
            Some(PieceKind::Elephant)
        );
    }

    #[test]
    fn test_click_outside_board_is_ignored() {
        let mut app = App::new(Side::Upper);
        click_square(&mut app, Square::B2);
        app.handle_event(Event::Click { column: 0, row: 0 });
        app.handle_event(Event::Click { column: 7, row: 6 });

        assert_eq!(app.game.selected(), Some(Square::B2));
        assert_eq!(app.game.turn(), 0);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_idle_click_is_reported() {
        let mut app = App::new(Side::Upper);
        click_square(&mut app, Square::B2);
        app.handle_event(Event::Select);
        assert_eq!(app.game.selected(), Some(Square::B2));
        assert!(app.status_message.is_none());

        // Idle click before any selection in a fresh game
        app.handle_event(Event::NewGame);
        click_square(&mut app, Square::A2);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Select one of your pieces first")
        );
    }

    #[test]
    fn test_game_over_then_new_game() {
        let mut app = App::new(Side::Upper);
        for sq in [
            Square::B1,
            Square::A2,
            Square::B3,
            Square::B2,
            Square::A2,
            Square::A3,
            Square::A4,
            Square::A3,
        ] {
            click_square(&mut app, sq);
        }
        assert_eq!(app.game.status(), GameStatus::End);
        assert_eq!(app.game.winner(), Some(Side::Lower));

        click_square(&mut app, Square::C4);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Game is over! Press N for a new game")
        );

        app.handle_event(Event::NewGame);
        assert_eq!(app.game.status(), GameStatus::Started);
        assert_eq!(app.game.turn(), 0);
        assert!(app.game.history().is_empty());
    }

    #[test]
    fn test_lower_first() {
        let mut app = App::new(Side::Lower);
        click_square(&mut app, Square::B2);
        assert_eq!(app.game.selected(), None);
        click_square(&mut app, Square::B3);
        assert_eq!(app.game.selected(), Some(Square::B3));

        app.handle_event(Event::NewGame);
        assert_eq!(app.game.side_to_move(), Side::Lower);
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = App::new(Side::Upper);
        app.handle_event(Event::Quit);
        assert_eq!(app.ui_mode, UiMode::ConfirmQuit);
        app.handle_event(Event::Char('n'));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.should_quit);

        app.handle_event(Event::Quit);
        app.handle_event(Event::Char('y'));
        assert!(app.should_quit);
    }
}
