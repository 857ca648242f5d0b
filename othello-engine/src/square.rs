//! Code for working with [`Square`]s on the board and the [`Step`]s between them.

use derive_more::{Add, AddAssign};
use std::fmt::{self, Display, Formatter};
use std::ops;

/// A location on the board: `x` is the column and `y` the row, both 0-indexed.
///
/// Squares order by `x` first and `y` second, which is only used to break ties between moves.
/// Coordinates are signed so that walking off the board is representable.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Square {
    pub x: isize,
    pub y: isize,
}

/// A unit vector pointing in one of the 8 compass directions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Add, AddAssign)]
pub struct Step {
    pub x: isize,
    pub y: isize,
}

/// Every direction a line of captured disks can run in.
pub const STEP_DIRECTIONS: [Step; 8] = [
    Step { x: -1, y: -1 },
    Step { x: -1, y: 0 },
    Step { x: -1, y: 1 },
    Step { x: 0, y: -1 },
    Step { x: 0, y: 1 },
    Step { x: 1, y: -1 },
    Step { x: 1, y: 0 },
    Step { x: 1, y: 1 },
];

impl Square {
    #[inline]
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Convert into a row-major index for a board with the given edge length.
    /// Returns None if the square is not on that board.
    #[inline]
    pub fn to_index(self, size: usize) -> Option<usize> {
        let size = size as isize;
        if (0..size).contains(&self.x) && (0..size).contains(&self.y) {
            Some((self.y * size + self.x) as usize)
        } else {
            None
        }
    }

    /// Convert from a row-major index on a board with the given edge length.
    #[inline]
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            x: (index % size) as isize,
            y: (index / size) as isize,
        }
    }
}

impl ops::Add<Step> for Square {
    type Output = Self;

    fn add(self, step: Step) -> Self {
        Self {
            x: self.x + step.x,
            y: self.y + step.y,
        }
    }
}

impl ops::AddAssign<Step> for Square {
    fn add_assign(&mut self, step: Step) {
        self.x += step.x;
        self.y += step.y;
    }
}

/// Convert this [`Square`] into string notation ("(3,2)").
impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseSquareError;

impl Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "give coordinates in the form 'x,y'")
    }
}

impl std::error::Error for ParseSquareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// Build a [`Square`] from the "x,y" notation players type in.
/// Both coordinates must be non-negative integers; whether the square
/// is on the board is left to the caller.
impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(',');
        let mut coordinate = || -> Result<isize, ParseSquareError> {
            let value: isize = parts
                .next()
                .ok_or(ParseSquareError)?
                .trim()
                .parse()
                .or(Err(ParseSquareError))?;
            if value < 0 {
                return Err(ParseSquareError);
            }
            Ok(value)
        };
        let x = coordinate()?;
        let y = coordinate()?;

        if parts.next().is_some() {
            return Err(ParseSquareError);
        }

        Ok(Self::new(x, y))
    }
}
