//! Pieces and the move/capture capability.

use std::fmt;

use crate::cell::Cell;
use crate::error::GameError;
use crate::player::Side;

/// The closed set of piece variants.
///
/// * `Lion` - the royal piece; capturing it ends the game.
/// * `Giraffe` - the orthogonal stepper.
/// * `Elephant` - the diagonal stepper.
/// * `Chick` - the forward stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Lion,
    Giraffe,
    Elephant,
    Chick,
}

impl PieceKind {
    /// Returns `true` for the royal variant.
    #[inline]
    pub fn is_royal(self) -> bool {
        match self {
            PieceKind::Lion => true,
            PieceKind::Giraffe | PieceKind::Elephant | PieceKind::Chick => false,
        }
    }

    /// Converts the kind to its board character for the given owner.
    ///
    /// Upper pieces are upper-case (`'L'`, `'G'`, `'E'`, `'C'`),
    /// lower pieces lower-case.
    pub fn to_char(self, owner: Side) -> char {
        let c = match self {
            PieceKind::Lion => 'L',
            PieceKind::Giraffe => 'G',
            PieceKind::Elephant => 'E',
            PieceKind::Chick => 'C',
        };
        match owner {
            Side::Upper => c,
            Side::Lower => c.to_ascii_lowercase(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Lion => "Lion",
            PieceKind::Giraffe => "Giraffe",
            PieceKind::Elephant => "Elephant",
            PieceKind::Chick => "Chick",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable identity of a piece for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u8);

/// A piece in play or in a dead zone.
///
/// Pieces are not `Clone`: exactly one cell or dead zone owns a
/// piece at any time, and moving it transfers that ownership.
#[derive(Debug, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    owner: Side,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceKind, owner: Side) -> Self {
        Self { id, kind, owner }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the side this piece belongs to.
    pub fn owner(&self) -> Side {
        self.owner
    }

    pub fn to_char(&self) -> char {
        self.kind.to_char(self.owner)
    }

    /// Moves the piece on `from` to `to`, capturing an opposing piece there.
    ///
    /// Movement patterns are not validated; any destination that is empty or
    /// holds an opposing piece is accepted.
    ///
    /// # Errors
    ///
    /// * [`GameError::EmptyCell`] if `from` holds no piece.
    /// * [`GameError::OwnPieceAtTarget`] if `to` holds a piece of the mover's
    ///   side. Neither cell is modified in that case.
    pub fn move_between(from: &mut Cell, to: &mut Cell) -> Result<MoveOutcome, GameError> {
        let mover = from.piece().ok_or(GameError::EmptyCell(from.square()))?;
        let (kind, owner) = (mover.kind, mover.owner);

        if to.piece().is_some_and(|occupant| occupant.owner == owner) {
            return Err(GameError::OwnPieceAtTarget(to.square()));
        }

        let piece = from
            .take_piece()
            .ok_or(GameError::EmptyCell(from.square()))?;
        let killed = to.put_piece(piece);

        Ok(MoveOutcome { kind, owner, killed })
    }
}

/// Result of a single [`Piece::move_between`] call.
#[derive(Debug)]
pub struct MoveOutcome {
    kind: PieceKind,
    owner: Side,
    killed: Option<Piece>,
}

impl MoveOutcome {
    /// Kind of the piece that moved.
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Side of the piece that moved.
    pub fn owner(&self) -> Side {
        self.owner
    }

    /// Returns the captured piece, if the destination held one.
    pub fn killed(&self) -> Option<&Piece> {
        self.killed.as_ref()
    }

    /// Consumes the outcome, handing over ownership of the captured piece.
    pub fn into_killed(self) -> Option<Piece> {
        self.killed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellHandle;
    use crate::square::Square;

    fn cell_with(square: Square, piece: Option<Piece>) -> Cell {
        let mut cell = Cell::new(square, CellHandle::new(square.index() as u32));
        if let Some(piece) = piece {
            cell.put_piece(piece);
        }
        cell
    }

    #[test]
    fn test_is_royal() {
        assert!(PieceKind::Lion.is_royal());
        assert!(!PieceKind::Giraffe.is_royal());
        assert!(!PieceKind::Elephant.is_royal());
        assert!(!PieceKind::Chick.is_royal());
    }

    #[test]
    fn test_to_char() {
        assert_eq!(PieceKind::Lion.to_char(Side::Upper), 'L');
        assert_eq!(PieceKind::Lion.to_char(Side::Lower), 'l');
        assert_eq!(
            Piece::new(PieceId(0), PieceKind::Giraffe, Side::Lower).to_char(),
            'g'
        );
    }

    #[test]
    fn test_move_to_empty_cell() {
        let mut from = cell_with(
            Square::B2,
            Some(Piece::new(PieceId(3), PieceKind::Chick, Side::Upper)),
        );
        let mut to = cell_with(Square::B3, None);

        let outcome = Piece::move_between(&mut from, &mut to).unwrap();
        assert!(outcome.killed().is_none());
        assert_eq!(outcome.kind(), PieceKind::Chick);
        assert_eq!(outcome.owner(), Side::Upper);
        assert!(from.is_empty());
        assert_eq!(to.piece().map(Piece::id), Some(PieceId(3)));
    }

    #[test]
    fn test_move_captures_opponent() {
        let mut from = cell_with(
            Square::B2,
            Some(Piece::new(PieceId(3), PieceKind::Chick, Side::Upper)),
        );
        let mut to = cell_with(
            Square::B3,
            Some(Piece::new(PieceId(7), PieceKind::Chick, Side::Lower)),
        );

        let outcome = Piece::move_between(&mut from, &mut to).unwrap();
        let killed = outcome.into_killed().unwrap();
        assert_eq!(killed.id(), PieceId(7));
        assert_eq!(killed.owner(), Side::Lower);
        assert_eq!(to.piece().map(Piece::id), Some(PieceId(3)));
    }

    #[test]
    fn test_move_from_empty_cell() {
        let mut from = cell_with(Square::A2, None);
        let mut to = cell_with(Square::A3, None);
        assert_eq!(
            Piece::move_between(&mut from, &mut to).unwrap_err(),
            GameError::EmptyCell(Square::A2)
        );
    }

    #[test]
    fn test_move_onto_own_piece_is_rejected() {
        let mut from = cell_with(
            Square::B1,
            Some(Piece::new(PieceId(1), PieceKind::Lion, Side::Upper)),
        );
        let mut to = cell_with(
            Square::B2,
            Some(Piece::new(PieceId(3), PieceKind::Chick, Side::Upper)),
        );

        assert_eq!(
            Piece::move_between(&mut from, &mut to).unwrap_err(),
            GameError::OwnPieceAtTarget(Square::B2)
        );
        assert_eq!(from.piece().map(Piece::id), Some(PieceId(1)));
        assert_eq!(to.piece().map(Piece::id), Some(PieceId(3)));
    }
}
