//! A single board location.

use crate::piece::Piece;
use crate::square::Square;

/// Opaque identifier of a cell's rendering surface.
///
/// Front ends hand these back to the board to resolve raw input into a
/// [`Cell`]; the numeric value carries no board meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellHandle(u32);

impl CellHandle {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// A board location holding at most one piece.
///
/// The cell exclusively owns the piece it holds and carries the selection
/// highlight flag.
#[derive(Debug)]
pub struct Cell {
    square: Square,
    handle: CellHandle,
    piece: Option<Piece>,
    active: bool,
}

impl Cell {
    /// Creates an empty, inactive cell.
    pub fn new(square: Square, handle: CellHandle) -> Self {
        Self {
            square,
            handle,
            piece: None,
            active: false,
        }
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn handle(&self) -> CellHandle {
        self.handle
    }

    /// Returns the piece on this cell, if any.
    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Removes and returns the piece on this cell.
    pub fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    /// Places a piece on this cell, returning whatever was there before.
    pub fn put_piece(&mut self, piece: Piece) -> Option<Piece> {
        self.piece.replace(piece)
    }

    /// Returns whether the selection highlight is on.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{PieceId, PieceKind};
    use crate::player::Side;

    #[test]
    fn test_new_cell_is_empty_and_inactive() {
        let cell = Cell::new(Square::B2, CellHandle::new(7));
        assert!(cell.is_empty());
        assert!(!cell.is_active());
        assert_eq!(cell.square(), Square::B2);
        assert_eq!(cell.handle().raw(), 7);
    }

    #[test]
    fn test_put_and_take() {
        let mut cell = Cell::new(Square::A1, CellHandle::new(0));
        let previous = cell.put_piece(Piece::new(PieceId(1), PieceKind::Chick, Side::Upper));
        assert!(previous.is_none());
        assert_eq!(cell.piece().map(Piece::kind), Some(PieceKind::Chick));

        let taken = cell.take_piece().unwrap();
        assert_eq!(taken.id(), PieceId(1));
        assert!(cell.is_empty());
    }

    #[test]
    fn test_highlight_toggle() {
        let mut cell = Cell::new(Square::C4, CellHandle::new(3));
        cell.activate();
        assert!(cell.is_active());
        cell.deactivate();
        assert!(!cell.is_active());
    }
}
