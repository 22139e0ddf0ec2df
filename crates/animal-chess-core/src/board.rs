//! Board representation and input-surface resolution.

use std::collections::HashMap;
use std::fmt;

use crate::cell::{Cell, CellHandle};
use crate::error::GameError;
use crate::piece::{Piece, PieceId, PieceKind};
use crate::player::Side;
use crate::renderer::Renderer;
use crate::square::{FILES, RANKS, Square};

/// First raw value handed out for cell handles.
const HANDLE_BASE: u32 = 0x100;

/// Standard opening, rank-major from A1.
#[rustfmt::skip]
const OPENING: [(Square, PieceKind, Side); 8] = [
    (Square::A1, PieceKind::Giraffe,  Side::Upper),
    (Square::B1, PieceKind::Lion,     Side::Upper),
    (Square::C1, PieceKind::Elephant, Side::Upper),
    (Square::B2, PieceKind::Chick,    Side::Upper),
    (Square::B3, PieceKind::Chick,    Side::Lower),
    (Square::A4, PieceKind::Elephant, Side::Lower),
    (Square::B4, PieceKind::Lion,     Side::Lower),
    (Square::C4, PieceKind::Giraffe,  Side::Lower),
];

/// A raw input target delivered by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The surface of a cell itself.
    Cell(CellHandle),
    /// The surface of a piece; resolves to the cell containing it.
    Piece(CellHandle),
    /// Anything that is not part of the playing surface.
    Other,
}

/// The grid of cells plus the handle lookup used to resolve input.
///
/// The handle-to-cell mapping is bijective and fixed when the board is built.
#[derive(Debug)]
pub struct Board {
    cells: Vec<Cell>,
    by_handle: HashMap<CellHandle, usize>,
    /// Pieces placed so far; the next piece gets this as its id.
    placed: u16,
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    fn default() -> Self {
        let mut board = Board::empty();
        for (square, kind, owner) in OPENING {
            let placed = board.place(square, kind, owner);
            debug_assert!(matches!(placed, Ok(None)));
        }
        board
    }
}

impl Board {
    /// Creates a board with the standard starting position.
    ///
    /// ```text
    ///     a b c
    ///   1 G L E
    ///   2 . C .
    ///   3 . c .
    ///   4 e l g
    /// ```
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with no pieces on it.
    pub fn empty() -> Board {
        let cells: Vec<Cell> = Square::iter()
            .map(|sq| Cell::new(sq, CellHandle::new(HANDLE_BASE + sq.index() as u32)))
            .collect();
        let by_handle = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (cell.handle(), index))
            .collect();

        Board {
            cells,
            by_handle,
            placed: 0,
        }
    }

    /// Puts a fresh piece on `square`, returning any piece it displaced.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PieceIdsExhausted`] once every [`PieceId`] has
    /// been handed out on this board. The board is left unchanged.
    pub fn place(
        &mut self,
        square: Square,
        kind: PieceKind,
        owner: Side,
    ) -> Result<Option<Piece>, GameError> {
        let id = u8::try_from(self.placed).map_err(|_| GameError::PieceIdsExhausted)?;
        self.placed += 1;
        Ok(self.cells[square.index()].put_piece(Piece::new(PieceId(id), kind, owner)))
    }

    /// Returns all cells in index order (A1..C4).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `index`, if it is on the board.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Returns the cell on `square`.
    pub fn cell_at(&self, square: Square) -> &Cell {
        &self.cells[square.index()]
    }

    /// Returns the rendering handle of the cell on `square`.
    pub fn handle(&self, square: Square) -> CellHandle {
        self.cells[square.index()].handle()
    }

    /// Resolves an input surface to a cell index.
    ///
    /// # Returns
    /// `None` for `Surface::Other` and for handles this board never issued.
    pub fn resolve(&self, surface: Surface) -> Option<usize> {
        match surface {
            Surface::Cell(handle) | Surface::Piece(handle) => self.by_handle.get(&handle).copied(),
            Surface::Other => None,
        }
    }

    /// Borrows two distinct cells mutably at once.
    ///
    /// # Returns
    /// `None` if the indices are equal or either is off the board.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Cell, &mut Cell)> {
        if a == b || a >= self.cells.len() || b >= self.cells.len() {
            return None;
        }
        if a < b {
            let (left, right) = self.cells.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.cells.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    /// Returns the number of highlighted cells.
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_active()).count()
    }

    /// Returns the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Finds the square holding the piece with the given id.
    pub fn find(&self, id: PieceId) -> Option<Square> {
        self.cells
            .iter()
            .find(|cell| cell.piece().is_some_and(|piece| piece.id() == id))
            .map(Cell::square)
    }

    /// Repaints every cell.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.render_board(self);
    }
}

impl fmt::Display for Board {
    /// Plain text grid; `*` marks the highlighted cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   a b c")?;
        for rank in 0..RANKS {
            write!(f, "{} ", rank + 1)?;
            for file in 0..FILES {
                let cell = &self.cells[rank * FILES + file];
                let symbol = cell.piece().map_or('.', Piece::to_char);
                let marker = if cell.is_active() { '*' } else { ' ' };
                write!(f, "{marker}{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
