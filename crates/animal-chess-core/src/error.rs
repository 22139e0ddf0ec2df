//! Error types for game operations.

use crate::square::Square;

/// Failure of a game operation whose precondition does not hold.
///
/// All operations are total given their preconditions; these variants make
/// the preconditions observable instead of relying on the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no cell is selected")]
    NoSelection,

    #[error("the game has already ended")]
    GameOver,

    #[error("cell {0} holds no piece")]
    EmptyCell(Square),

    #[error("cell {0} is occupied by a piece of the moving side")]
    OwnPieceAtTarget(Square),

    #[error("cell index {0} is outside the board")]
    InvalidCell(usize),

    #[error("no piece ids left on this board")]
    PieceIdsExhausted,
}
