//! Event handling for the TUI.

use std::time::Duration;

use animal_chess_core::{Board, Square, Surface};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Quit the application
    Quit,
    /// Force quit the application (Ctrl+C)
    ForceQuit,
    /// Move cursor up
    CursorUp,
    /// Move cursor down
    CursorDown,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Click the cell under the cursor (Enter or Space)
    Select,
    /// Left mouse button pressed at a terminal position
    Click { column: u16, row: u16 },
    /// Start a new game
    NewGame,
    /// Character input (for dialogs)
    Char(char),
}

/// Board area configuration for mouse hit testing.
/// These values must match the render layout.
#[derive(Debug, Clone, Copy)]
pub struct BoardArea {
    pub start_row: u16,
    pub start_col: u16,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Default for BoardArea {
    fn default() -> Self {
        Self {
            // Title block takes rows 0-2, the board block border row 3,
            // the column header row 4 and the top border row 5.
            start_row: 6,
            // Block border plus the "1 │" rank label.
            start_col: 4,
            cell_width: 4,  // " X │"
            cell_height: 2, // content + separator
        }
    }
}

impl BoardArea {
    /// Returns the square whose cell covers a terminal position, if any.
    ///
    /// Grid lines between cells belong to no square.
    pub fn square_at(&self, column: u16, row: u16) -> Option<Square> {
        if row < self.start_row || column < self.start_col {
            return None;
        }
        let dy = row - self.start_row;
        let dx = column - self.start_col;
        if dy % self.cell_height != 0 || dx % self.cell_width == self.cell_width - 1 {
            return None;
        }
        Square::from_file_rank(
            (dx / self.cell_width) as usize,
            (dy / self.cell_height) as usize,
        )
    }

    /// Translates a terminal position into an input surface on `board`.
    ///
    /// The middle column of an occupied cell is the piece glyph and yields
    /// `Surface::Piece`; the rest of the cell yields `Surface::Cell`.
    pub fn surface_at(&self, board: &Board, column: u16, row: u16) -> Surface {
        let Some(sq) = self.square_at(column, row) else {
            return Surface::Other;
        };
        let on_glyph = (column - self.start_col) % self.cell_width == 1;
        if on_glyph && !board.cell_at(sq).is_empty() {
            Surface::Piece(board.handle(sq))
        } else {
            Surface::Cell(board.handle(sq))
        }
    }
}

/// Polls for an event with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c'))
            {
                return Ok(Some(Event::ForceQuit));
            }
            Ok(Some(map_key_event(key.code)))
        }
        CrosstermEvent::Mouse(mouse) => Ok(map_mouse_event(mouse)),
        _ => Ok(None),
    }
}

/// Maps a key code to an application event.
fn map_key_event(code: KeyCode) -> Event {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Event::Quit,

        // Arrows, WASD and vim keys
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Event::CursorUp,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Event::CursorDown,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Event::CursorLeft,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Event::CursorRight,

        KeyCode::Enter | KeyCode::Char(' ') => Event::Select,
        KeyCode::Char('n') => Event::NewGame,

        KeyCode::Char(c) => Event::Char(c),
        _ => Event::Char('\0'),
    }
}

/// Maps a mouse event to an application event.
///
/// Hit testing against the board happens in the app, which knows where
/// pieces stand.
fn map_mouse_event(mouse: crossterm::event::MouseEvent) -> Option<Event> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Event::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_at_cell_content() {
        let area = BoardArea::default();
        assert_eq!(area.square_at(4, 6), Some(Square::A1));
        assert_eq!(area.square_at(6, 6), Some(Square::A1));
        assert_eq!(area.square_at(9, 8), Some(Square::B2));
        assert_eq!(area.square_at(12, 12), Some(Square::C4));
    }

    #[test]
    fn test_square_at_grid_lines() {
        let area = BoardArea::default();
        // Vertical separator after a1
        assert_eq!(area.square_at(7, 6), None);
        // Horizontal separator below rank 1
        assert_eq!(area.square_at(5, 7), None);
        // Rank label and header
        assert_eq!(area.square_at(2, 6), None);
        assert_eq!(area.square_at(5, 4), None);
        // Past the last rank and file
        assert_eq!(area.square_at(5, 14), None);
        assert_eq!(area.square_at(16, 6), None);
    }

    #[test]
    fn test_surface_at() {
        let area = BoardArea::default();
        let board = Board::new();

        // Glyph of the upper chick on b2
        assert_eq!(
            area.surface_at(&board, 9, 8),
            Surface::Piece(board.handle(Square::B2))
        );
        // Padding next to the glyph
        assert_eq!(
            area.surface_at(&board, 8, 8),
            Surface::Cell(board.handle(Square::B2))
        );
        // Empty cell a2
        assert_eq!(
            area.surface_at(&board, 5, 8),
            Surface::Cell(board.handle(Square::A2))
        );
        assert_eq!(area.surface_at(&board, 0, 0), Surface::Other);
    }

    #[test]
    fn test_surfaces_resolve_to_the_clicked_cell() {
        let area = BoardArea::default();
        let board = Board::new();
        for sq in Square::iter() {
            let column = area.start_col + sq.file() as u16 * area.cell_width + 1;
            let row = area.start_row + sq.rank() as u16 * area.cell_height;
            let surface = area.surface_at(&board, column, row);
            assert_eq!(board.resolve(surface), Some(sq.index()));
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key_event(KeyCode::Char('k')), Event::CursorUp);
        assert_eq!(map_key_event(KeyCode::Enter), Event::Select);
        assert_eq!(map_key_event(KeyCode::Char('n')), Event::NewGame);
        assert_eq!(map_key_event(KeyCode::Esc), Event::Quit);
        assert_eq!(map_key_event(KeyCode::Char('y')), Event::Char('y'));
    }
}
