//! Recoverable engine errors.
//!
//! Broken board invariants are not represented here: they can only come from a bug
//! in move generation, so they panic instead.

use crate::{Disk, Square, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use derive_more::{Display, Error};

#[derive(Clone, Debug, PartialEq, Eq, Error, Display)]
pub enum Error {
    /// The requested board size is not supported.
    #[display(
        fmt = "Unsupported board size: {} (expected {}..={})",
        size,
        MIN_BOARD_SIZE,
        MAX_BOARD_SIZE
    )]
    OutOfRange { size: usize },

    /// A square was queried that is not on the board.
    #[display(fmt = "Invalid coordinates: {}", square)]
    OutOfBounds { square: Square },

    /// A move selector returned a square that is not a legal move.
    #[display(fmt = "Can't place a {} disk in square {}", disk, square)]
    IllegalMove { disk: Disk, square: Square },

    /// A human player's input stream ended before a move was chosen.
    #[display(fmt = "Input closed while waiting for a move")]
    InputClosed,

    /// Reading or writing the player's terminal failed.
    #[display(fmt = "Terminal I/O failed: {}", message)]
    Terminal { message: String },
}
