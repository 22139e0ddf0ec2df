//! Game state machine for Animal Chess.
//!
//! This module provides the `Game` struct which owns the board, both dead
//! zones and the turn bookkeeping. It turns input surfaces into selections
//! and moves, routes captured pieces, detects the royal capture that ends the
//! game, and tells the [`Renderer`] what to repaint.

use tracing::{debug, info};

use crate::board::{Board, Surface};
use crate::dead_zone::DeadZone;
use crate::error::GameError;
use crate::piece::{Piece, PieceKind};
use crate::player::{Player, Side};
use crate::renderer::{NullRenderer, Renderer};
use crate::square::{Square, TOTAL_SQUARES};

/// Extra message shown in the status line once the game has ended.
pub const END_MARKER: &str = "END!";

/// Lifecycle of a game. `End` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Started,
    End,
}

/// One completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Turn number the move was played on.
    pub turn: u32,
    /// Side that moved.
    pub side: Side,
    /// Kind of the piece that moved.
    pub piece: PieceKind,
    pub from: Square,
    pub to: Square,
    /// Kind of the captured piece, if any.
    pub killed: Option<PieceKind>,
}

/// What a dispatched input event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The event did not reach a playable surface, or the game is over.
    Ignored,
    /// Empty or enemy cell clicked with nothing selected.
    Idle,
    /// The cell on this square became the selection.
    Selected(Square),
    /// A move was executed and the turn completed.
    Moved(MoveRecord),
}

/// Represents the state of an Animal Chess game.
///
/// `R` receives repaint requests; tests and headless callers use
/// [`NullRenderer`].
#[derive(Debug)]
pub struct Game<R = NullRenderer> {
    board: Board,
    upper_player: Player,
    lower_player: Player,
    /// Pieces captured by Upper.
    upper_dead_zone: DeadZone,
    /// Pieces captured by Lower.
    lower_dead_zone: DeadZone,
    turn: u32,
    current: Side,
    /// Index of the selected cell. After a move it briefly names the target
    /// cell until `change_turn` clears it.
    selected: Option<usize>,
    status: GameStatus,
    history: Vec<MoveRecord>,
    renderer: R,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(NullRenderer)
    }
}

impl<R: Renderer> Game<R> {
    /// Creates a new game in the standard starting position with Upper to move.
    ///
    /// The board and the initial status line are rendered once.
    pub fn new(renderer: R) -> Self {
        Self::from_board(Board::new(), Side::Upper, renderer)
    }

    /// Creates a game from an existing board position.
    ///
    /// # Arguments
    ///
    /// * `board` - The position to start from
    /// * `side_to_move` - Which side moves first
    /// * `renderer` - Receiver of repaint requests
    pub fn from_board(board: Board, side_to_move: Side, mut renderer: R) -> Self {
        board.render(&mut renderer);

        let mut game = Self {
            board,
            upper_player: Player::new(Side::Upper),
            lower_player: Player::new(Side::Lower),
            upper_dead_zone: DeadZone::new(Side::Upper),
            lower_dead_zone: DeadZone::new(Side::Lower),
            turn: 0,
            current: side_to_move,
            selected: None,
            status: GameStatus::Started,
            history: Vec::new(),
            renderer,
        };
        game.render_info(None);
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of completed turns.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        match self.current {
            Side::Upper => &self.upper_player,
            Side::Lower => &self.lower_player,
        }
    }

    pub fn side_to_move(&self) -> Side {
        self.current
    }

    pub fn upper_player(&self) -> &Player {
        &self.upper_player
    }

    pub fn lower_player(&self) -> &Player {
        &self.lower_player
    }

    /// Returns the square of the selected cell, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected.and_then(Square::from_index)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::End
    }

    /// Returns the side that captured the opposing Lion.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_over() {
            return None;
        }
        self.history.last().map(|record| record.side)
    }

    /// Returns the dead zone holding the pieces captured by `side`.
    pub fn dead_zone(&self, side: Side) -> &DeadZone {
        match side {
            Side::Upper => &self.upper_dead_zone,
            Side::Lower => &self.lower_dead_zone,
        }
    }

    /// Returns the completed moves in play order.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Formats the status line: `"#{turn} {SIDE} turn"`, followed by
    /// `" |{extra}"` when an extra message is given.
    pub fn info_line(&self, extra: Option<&str>) -> String {
        let base = format!("#{} {} turn", self.turn, self.current_player().side());
        match extra {
            Some(extra) => format!("{base} |{extra}"),
            None => base,
        }
    }

    /// Returns `true` iff `index` names a cell holding a piece of the side to move.
    pub fn is_current_user_piece(&self, index: Option<usize>) -> bool {
        index
            .and_then(|index| self.board.cell(index))
            .and_then(|cell| cell.piece())
            .is_some_and(|piece| piece.owner() == self.current)
    }

    /// Makes the cell at `index` the selection, replacing any previous one.
    ///
    /// The caller decides whether the cell belongs to the side to move; see
    /// [`Game::is_current_user_piece`].
    ///
    /// # Errors
    ///
    /// * [`GameError::GameOver`] once the game has ended.
    /// * [`GameError::InvalidCell`] if `index` is off the board.
    /// * [`GameError::EmptyCell`] if the cell holds no piece.
    pub fn select(&mut self, index: usize) -> Result<(), GameError> {
        self.ensure_started()?;

        let cell = self.board.cell(index).ok_or(GameError::InvalidCell(index))?;
        if cell.is_empty() {
            return Err(GameError::EmptyCell(cell.square()));
        }

        if let Some(previous) = self.selected.take()
            && let Some(cell) = self.board.cell_mut(previous)
        {
            cell.deactivate();
            self.renderer.render_cell(cell);
        }

        if let Some(cell) = self.board.cell_mut(index) {
            cell.activate();
            self.renderer.render_cell(cell);
            debug!(turn = self.turn, side = %self.current, square = %cell.square(), "select");
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Moves the selected piece to the cell at `target`.
    ///
    /// Clears the selection highlight, delegates to the piece's move
    /// capability, routes a captured piece into the capturing side's dead
    /// zone and ends the game if the captured piece was royal. The selection
    /// reference is left on `target` for [`Game::change_turn`] to clear.
    ///
    /// # Errors
    ///
    /// * [`GameError::GameOver`] once the game has ended.
    /// * [`GameError::NoSelection`] if no cell is selected.
    /// * [`GameError::InvalidCell`] if `target` is off the board.
    /// * [`GameError::OwnPieceAtTarget`] if `target` holds a piece of the
    ///   moving side. The selection is kept in that case.
    pub fn move_selected(&mut self, target: usize) -> Result<MoveRecord, GameError> {
        self.ensure_started()?;
        let from = self.selected.ok_or(GameError::NoSelection)?;
        if target >= TOTAL_SQUARES {
            return Err(GameError::InvalidCell(target));
        }

        let (from_cell, to_cell) = match self.board.pair_mut(from, target) {
            Some(pair) => pair,
            None => return Err(GameError::OwnPieceAtTarget(self.board.cells()[target].square())),
        };

        from_cell.deactivate();
        let outcome = match Piece::move_between(from_cell, to_cell) {
            Ok(outcome) => outcome,
            Err(err) => {
                from_cell.activate();
                return Err(err);
            }
        };

        let record = MoveRecord {
            turn: self.turn,
            side: outcome.owner(),
            piece: outcome.kind(),
            from: from_cell.square(),
            to: to_cell.square(),
            killed: outcome.killed().map(Piece::kind),
        };
        self.selected = Some(target);

        debug!(
            turn = record.turn,
            side = %record.side,
            piece = %record.piece,
            from = %record.from,
            to = %record.to,
            killed = ?record.killed,
            "move"
        );

        if let Some(killed) = outcome.into_killed() {
            let royal = killed.kind().is_royal();
            match killed.owner() {
                Side::Upper => self.lower_dead_zone.put(killed),
                Side::Lower => self.upper_dead_zone.put(killed),
            }

            if royal {
                self.status = GameStatus::End;
                info!(winner = %record.side, turn = record.turn, "lion captured, game over");
            }
        }

        self.history.push(record);
        Ok(record)
    }

    /// Completes a turn after a move.
    ///
    /// Clears the selection, then either advances the turn and hands play to
    /// the other side, or, if the game has ended, shows the end marker and
    /// leaves the turn counter and side to move as they are. The whole board
    /// is repainted in both cases.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoSelection`] if there is no selection reference
    /// to clear, i.e. no move preceded this call.
    pub fn change_turn(&mut self) -> Result<(), GameError> {
        let index = self.selected.take().ok_or(GameError::NoSelection)?;
        if let Some(cell) = self.board.cell_mut(index) {
            cell.deactivate();
        }

        match self.status {
            GameStatus::End => self.render_info(Some(END_MARKER)),
            GameStatus::Started => {
                self.turn += 1;
                self.current = self.current.opposite();
                debug!(turn = self.turn, side = %self.current, "turn change");
                self.render_info(None);
            }
        }

        self.board.render(&mut self.renderer);
        Ok(())
    }

    /// Handles one input event.
    ///
    /// Selecting an own piece always wins over moving; otherwise an existing
    /// selection moves to the clicked cell and the turn completes. Once the
    /// game has ended every event is ignored.
    pub fn dispatch(&mut self, surface: Surface) -> Result<Dispatch, GameError> {
        if self.is_over() {
            return Ok(Dispatch::Ignored);
        }

        let Some(index) = self.board.resolve(surface) else {
            return Ok(Dispatch::Ignored);
        };

        if self.is_current_user_piece(Some(index)) {
            self.select(index)?;
            return Ok(Dispatch::Selected(self.board.cells()[index].square()));
        }

        if self.selected.is_some() {
            let record = self.move_selected(index)?;
            self.change_turn()?;
            return Ok(Dispatch::Moved(record));
        }

        Ok(Dispatch::Idle)
    }

    /// Dispatches a click on the cell surface of `square`.
    pub fn click(&mut self, square: Square) -> Result<Dispatch, GameError> {
        let handle = self.board.handle(square);
        self.dispatch(Surface::Cell(handle))
    }

    fn ensure_started(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::Started => Ok(()),
            GameStatus::End => Err(GameError::GameOver),
        }
    }

    fn render_info(&mut self, extra: Option<&str>) {
        let info = self.info_line(extra);
        self.renderer.render_info(&info);
    }
}
