//! `othello-engine` is a rules engine for Othello on square boards of any size from 4 to 10.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`Disk`], [`Square`] and [`Step`] are the small value types everything else is built on.
//!  - [`Board`] owns the grid, generates legal [`Move`]s and applies them.
//!    Applying a move that was not generated for the current position is a bug and panics.
//!  - [`Othello`] drives complete games: it alternates the two [`Player`]s, asks each one's
//!    [`MoveSelector`] for a move, detects the end of the game and records the game log.

pub mod test_utils;

mod board;
mod disk;
mod error;
mod game;
mod movegen;
mod selector;
mod settings;
mod square;
mod utils;

pub use board::*;
pub use disk::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use selector::*;
pub use settings::*;
pub use square::*;

/// The smallest supported board edge length.
pub const MIN_BOARD_SIZE: usize = 4;

/// The largest supported board edge length.
pub const MAX_BOARD_SIZE: usize = 10;

/// The edge length of a standard Othello board.
pub const DEFAULT_BOARD_SIZE: usize = 8;
