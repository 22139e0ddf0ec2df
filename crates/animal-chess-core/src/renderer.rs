//! The rendering boundary.
//!
//! The game reports what changed through this trait and never reads anything
//! back, so a front end may paint eagerly, mark state dirty for the next
//! frame, or ignore the calls altogether.

use crate::board::Board;
use crate::cell::Cell;

/// Sink for repaint requests and status text.
pub trait Renderer {
    /// Repaint every cell from current occupancy and highlight state.
    fn render_board(&mut self, board: &Board);

    /// Repaint a single cell.
    fn render_cell(&mut self, cell: &Cell);

    /// Show a formatted status line such as `"#3 LOWER turn"`.
    fn render_info(&mut self, info: &str);
}

/// Renderer that discards every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_board(&mut self, _board: &Board) {}

    fn render_cell(&mut self, _cell: &Cell) {}

    fn render_info(&mut self, _info: &str) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render_board(&mut self, board: &Board) {
        (**self).render_board(board);
    }

    fn render_cell(&mut self, cell: &Cell) {
        (**self).render_cell(cell);
    }

    fn render_info(&mut self, info: &str) {
        (**self).render_info(info);
    }
}
