//! Core game logic for Animal Chess, a 3x4 capture game in the twelve-janggi family.
//!
//! The crate is organised leaves first:
//! - [`player`]: the two sides and their players
//! - [`piece`]: piece kinds and the move/capture capability
//! - [`square`], [`cell`], [`board`]: board topology and the input-surface lookup
//! - [`dead_zone`]: holding areas for captured pieces
//! - [`renderer`]: the rendering boundary the game reports to
//! - [`game`]: the turn state machine and event dispatch

pub mod board;
pub mod cell;
pub mod dead_zone;
pub mod error;
pub mod game;
pub mod piece;
pub mod player;
pub mod renderer;
pub mod square;

pub use board::{Board, Surface};
pub use cell::{Cell, CellHandle};
pub use dead_zone::DeadZone;
pub use error::GameError;
pub use game::{Dispatch, Game, GameStatus, MoveRecord};
pub use piece::{MoveOutcome, Piece, PieceId, PieceKind};
pub use player::{Player, Side};
pub use renderer::{NullRenderer, Renderer};
pub use square::Square;
