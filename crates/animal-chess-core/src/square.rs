use std::fmt;
use std::str::FromStr;

/// Represents a square on the animal chess board, ranging from A1 to C4.
///
/// Files (columns) are labeled A-C and ranks (rows) 1-4. Rank 1 is the
/// Upper side's home rank. The board is indexed as follows:
///
/// ```text
///   A  B  C
/// 1 00 01 02
/// 2 03 04 05
/// 3 06 07 08
/// 4 09 10 11
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1,
    A2, B2, C2,
    A3, B3, C3,
    A4, B4, C4,
}

/// Number of files (columns) on the board.
pub const FILES: usize = 3;
/// Number of ranks (rows) on the board.
pub const RANKS: usize = 4;
pub const TOTAL_SQUARES: usize = FILES * RANKS;

#[rustfmt::skip]
const ALL: [Square; TOTAL_SQUARES] = [
    Square::A1, Square::B1, Square::C1,
    Square::A2, Square::B2, Square::C2,
    Square::A3, Square::B3, Square::C3,
    Square::A4, Square::B4, Square::C4,
];

impl Square {
    /// Converts the `Square` into its board index (0-11).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a board index into a `Square`.
    ///
    /// # Returns
    /// `Some(Square)` if the index is valid (0-11), `None` otherwise.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        ALL.get(index).copied()
    }

    /// Creates a `Square` from zero-based file and rank coordinates.
    ///
    /// # Returns
    /// `None` if either coordinate lies outside the board.
    pub fn from_file_rank(file: usize, rank: usize) -> Option<Square> {
        if file >= FILES || rank >= RANKS {
            return None;
        }
        Self::from_index(rank * FILES + file)
    }

    /// Returns the file index (0-2) where 0 represents file A.
    #[inline]
    pub fn file(self) -> usize {
        self.index() % FILES
    }

    /// Returns the rank index (0-3) where 0 represents rank 1.
    #[inline]
    pub fn rank(self) -> usize {
        self.index() / FILES
    }

    /// Returns an iterator over all squares from A1 to C4 in index order.
    pub fn iter() -> impl Iterator<Item = Square> {
        ALL.into_iter()
    }
}

/// Error type for square parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    #[error("invalid square format: must be 2 characters (e.g., 'b2')")]
    InvalidFormat,
    #[error("invalid file '{0}': must be a-c or A-C")]
    InvalidFile(char),
    #[error("invalid rank '{0}': must be 1-4")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as `"b2"`. Upper-case files are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = match file_char.to_ascii_lowercase() {
            c @ 'a'..='c' => c as usize - 'a' as usize,
            _ => return Err(SquareError::InvalidFile(file_char)),
        };
        let rank = match rank_char {
            c @ '1'..='4' => c as usize - '1' as usize,
            _ => return Err(SquareError::InvalidRank(rank_char)),
        };

        Square::from_file_rank(file, rank).ok_or(SquareError::InvalidFormat)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.file() as u8 + b'a') as char;
        let rank = (self.rank() as u8 + b'1') as char;
        write!(f, "{file}{rank}")
    }
}
