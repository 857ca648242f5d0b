//! The contents of a single board cell.

use std::fmt;

/// One game piece, or the lack of one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Disk {
    Black,
    Empty,
    White,
}

impl std::ops::Not for Disk {
    type Output = Self;

    /// Gets the opposing color. Empty stays empty.
    fn not(self) -> Self {
        self.opponent()
    }
}

impl Disk {
    /// Get the opposing color. Empty has no opponent and maps to itself.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::Empty => Self::Empty,
            Self::White => Self::Black,
        }
    }

    /// The contribution of this cell to the board score:
    /// negative favours black, positive favours white.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            Self::Black => -1,
            Self::Empty => 0,
            Self::White => 1,
        }
    }

    /// Single character used in the game log and board serialization.
    #[inline]
    pub const fn board_char(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Empty => '_',
            Self::White => 'W',
        }
    }

    /// Parse a board serialization character.
    pub const fn from_board_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(Self::Black),
            '_' => Some(Self::Empty),
            'W' => Some(Self::White),
            _ => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("BLACK"),
            Self::Empty => f.write_str("EMPTY"),
            Self::White => f.write_str("WHITE"),
        }
    }
}
