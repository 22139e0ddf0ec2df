//! Holding areas for captured pieces.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::player::Side;
use crate::square::TOTAL_SQUARES;

/// Upper bound on captures per zone. Captured pieces never return to the
/// board and the board never holds more than one piece per square.
pub const CAPACITY: usize = TOTAL_SQUARES;

/// Ordered collection of pieces captured by the side named in `label`.
///
/// A piece placed here is out of board play for good.
#[derive(Debug)]
pub struct DeadZone {
    label: Side,
    pieces: ArrayVec<Piece, CAPACITY>,
}

impl DeadZone {
    pub fn new(label: Side) -> Self {
        Self {
            label,
            pieces: ArrayVec::new(),
        }
    }

    /// Returns the side that collects the pieces held here.
    pub fn label(&self) -> Side {
        self.label
    }

    /// Appends a captured piece.
    pub fn put(&mut self, piece: Piece) {
        debug_assert_ne!(piece.owner(), self.label, "a side never captures its own piece");
        self.pieces.push(piece);
    }

    /// Returns the captured pieces in capture order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{PieceId, PieceKind};

    #[test]
    fn test_put_keeps_order() {
        let mut zone = DeadZone::new(Side::Lower);
        assert!(zone.is_empty());

        zone.put(Piece::new(PieceId(3), PieceKind::Chick, Side::Upper));
        zone.put(Piece::new(PieceId(0), PieceKind::Giraffe, Side::Upper));

        assert_eq!(zone.len(), 2);
        assert_eq!(zone.label(), Side::Lower);
        let ids: Vec<_> = zone.pieces().iter().map(Piece::id).collect();
        assert_eq!(ids, vec![PieceId(3), PieceId(0)]);
    }

    #[test]
    fn test_holds_a_full_board() {
        let mut zone = DeadZone::new(Side::Upper);
        for id in 0..CAPACITY as u8 {
            zone.put(Piece::new(PieceId(id), PieceKind::Chick, Side::Lower));
        }
        assert_eq!(zone.len(), TOTAL_SQUARES);
    }
}
