//! Renderer and terminal display for the Animal Chess CLI.
//!
//! This module provides `StatusRenderer`, the [`Renderer`] both front ends
//! plug into the core game, and colored board printing for line mode.

use animal_chess_core::{Board, Cell, Game, Piece, Renderer, Side};
use colored::{ColoredString, Colorize};

/// The game type used by the CLI front ends.
pub type CliGame = Game<StatusRenderer>;

/// Creates a new game in the standard position with `first` to move.
pub fn new_game(first: Side) -> CliGame {
    Game::from_board(Board::new(), first, StatusRenderer::default())
}

/// Renderer that remembers the latest status line and whether anything
/// needs repainting.
///
/// The TUI repaints every frame anyway and only reads `info`; line mode
/// prints the board whenever `take_dirty` reports a change.
#[derive(Debug, Default)]
pub struct StatusRenderer {
    info: String,
    dirty: bool,
}

impl StatusRenderer {
    /// Returns the latest status line.
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Returns whether a repaint was requested since the last call, and resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Renderer for StatusRenderer {
    fn render_board(&mut self, _board: &Board) {
        self.dirty = true;
    }

    fn render_cell(&mut self, _cell: &Cell) {
        self.dirty = true;
    }

    fn render_info(&mut self, info: &str) {
        self.info = info.to_string();
        self.dirty = true;
    }
}

/// Colors a piece by owner: green for Upper, yellow for Lower.
fn piece_symbol(piece: &Piece) -> ColoredString {
    let text = format!(" {} ", piece.to_char());
    match piece.owner() {
        Side::Upper => text.bright_green(),
        Side::Lower => text.bright_yellow(),
    }
}

/// Prints a colored representation of the board and both dead zones.
///
/// The selected cell is shown on a grey background.
pub fn print_board(game: &CliGame) {
    let board = game.board();

    println!("      a   b   c");
    println!("    ┌───┬───┬───┐");

    for (rank, row) in board.cells().chunks(3).enumerate() {
        print!("  {} │", rank + 1);
        for cell in row {
            let symbol = match cell.piece() {
                Some(piece) => piece_symbol(piece),
                None => "   ".normal(),
            };
            let symbol = if cell.is_active() {
                symbol.on_bright_black()
            } else {
                symbol
            };
            print!("{symbol}│");
        }

        match rank {
            0 => println!("   {}", dead_zone_line(game, Side::Upper)),
            3 => println!("   {}", dead_zone_line(game, Side::Lower)),
            _ => println!(),
        }

        if rank < 3 {
            println!("    ├───┼───┼───┤");
        }
    }

    println!("    └───┴───┴───┘");
    println!("  {}", game.renderer().info().bright_cyan());

    if let Some(winner) = game.winner() {
        println!("  {}", format!("*** {winner} wins ***").bright_red());
    }
}

/// Formats the pieces captured by `side` as a single line.
fn dead_zone_line(game: &CliGame, side: Side) -> String {
    let captured: String = game
        .dead_zone(side)
        .pieces()
        .iter()
        .map(Piece::to_char)
        .collect();
    format!("{side} captured: {captured}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use animal_chess_core::Square;

    #[test]
    fn test_new_game_renders_initial_status() {
        let mut game = new_game(Side::Upper);
        assert_eq!(game.renderer().info(), "#0 UPPER turn");
        assert!(game.renderer_mut().take_dirty());
        assert!(!game.renderer_mut().take_dirty());
    }

    #[test]
    fn test_lower_first() {
        let game = new_game(Side::Lower);
        assert_eq!(game.side_to_move(), Side::Lower);
        assert_eq!(game.renderer().info(), "#0 LOWER turn");
    }

    #[test]
    fn test_select_marks_dirty() {
        let mut game = new_game(Side::Upper);
        game.renderer_mut().take_dirty();
        game.click(Square::B2).unwrap();
        assert!(game.renderer_mut().take_dirty());
    }

    #[test]
    fn test_move_updates_info() {
        let mut game = new_game(Side::Upper);
        game.click(Square::B2).unwrap();
        game.click(Square::B3).unwrap();
        assert_eq!(game.renderer().info(), "#1 LOWER turn");
        assert_eq!(dead_zone_line(&game, Side::Upper), "UPPER captured: c");
        assert_eq!(dead_zone_line(&game, Side::Lower), "LOWER captured: ");
    }
}
