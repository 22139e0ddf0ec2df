//! Board widget for rendering the 3x4 Animal Chess board.

use animal_chess_core::{
    Board, Square,
    square::{FILES, RANKS},
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::render::side_color;

const MIN_WIDTH: u16 = 15;
const MIN_HEIGHT: u16 = 11;

/// Widget for rendering the game board.
pub struct BoardWidget<'a> {
    board: &'a Board,
    /// Cursor position (rank, file)
    cursor: (usize, usize),
}

impl<'a> BoardWidget<'a> {
    /// Creates a new board widget.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: (0, 0),
        }
    }

    /// Sets the cursor position.
    pub fn cursor(mut self, rank: usize, file: usize) -> Self {
        self.cursor = (rank, file);
        self
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return;
        }

        let header_style = Style::default().fg(Color::Cyan);
        let header = Line::from(vec![
            Span::raw("    "),
            Span::styled("a", header_style),
            Span::raw("   "),
            Span::styled("b", header_style),
            Span::raw("   "),
            Span::styled("c", header_style),
        ]);
        buf.set_line(area.x, area.y, &header, area.width);
        buf.set_string(area.x, area.y + 1, "  ┌───┬───┬───┐", Style::default());

        for rank in 0..RANKS {
            let y = area.y + 2 + (rank as u16) * 2;
            buf.set_string(area.x, y, format!("{} │", rank + 1), header_style);

            for file in 0..FILES {
                let Some(sq) = Square::from_file_rank(file, rank) else {
                    continue;
                };
                let cell = self.board.cell_at(sq);

                let (content, mut style) = match cell.piece() {
                    Some(piece) => (
                        format!(" {} ", piece.to_char()),
                        Style::default()
                            .fg(side_color(piece.owner()))
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => ("   ".to_string(), Style::default()),
                };

                if self.cursor == (rank, file) {
                    style = style.bg(Color::DarkGray);
                }
                // Selection wins over the cursor.
                if cell.is_active() {
                    style = style.bg(Color::Rgb(50, 50, 80)).add_modifier(Modifier::REVERSED);
                }

                let x = area.x + 3 + (file as u16) * 4;
                buf.set_string(x, y, content, style);
                buf.set_string(x + 3, y, "│", Style::default());
            }

            if rank < RANKS - 1 {
                buf.set_string(area.x, y + 1, "  ├───┼───┼───┤", Style::default());
            }
        }

        buf.set_string(area.x, area.y + 9, "  └───┴───┴───┘", Style::default());

        if let Some(sq) = Square::from_file_rank(self.cursor.1, self.cursor.0) {
            buf.set_string(
                area.x,
                area.y + 10,
                format!("  Cursor: {sq}"),
                Style::default().fg(Color::Cyan),
            );
        }
    }
}
