use std::fmt;

/// One of the two sides of the board.
///
/// * `Upper` - starts on ranks 1-2 and moves first.
/// * `Lower` - starts on ranks 3-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Upper,
    Lower,
}

impl Side {
    /// Returns the opposing side.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Upper => Side::Lower,
            Side::Lower => Side::Upper,
        }
    }

    /// Returns the label used in status lines (`"UPPER"` or `"LOWER"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Upper => "UPPER",
            Side::Lower => "LOWER",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A participant in the game, identified by the side it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    side: Side,
}

impl Player {
    pub const fn new(side: Side) -> Self {
        Self { side }
    }

    pub fn side(&self) -> Side {
        self.side
    }
}
