//! Game settings resolved from the command line.

use crate::{Error, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub board_size: usize,
    /// Computer plays both sides.
    pub autoplay_mode: bool,
    /// Autoplay without per-turn output; only the result and log fingerprint are printed.
    pub check_mode: bool,
    /// Show legal moves and their values to human players.
    pub show_helpers: bool,
    /// Print the game log when a game ends.
    pub show_log: bool,
    /// Deterministic computer moves without thinking pauses.
    pub test_mode: bool,
    /// Skip the interactive setup questions.
    pub use_defaults: bool,
}

impl Settings {
    /// Settings for a silent, reproducible autoplay run on a board of `board_size`.
    pub fn check(board_size: usize) -> Self {
        Self {
            board_size,
            autoplay_mode: true,
            check_mode: true,
            show_helpers: false,
            show_log: true,
            test_mode: true,
            use_defaults: true,
        }
    }

    /// Check that the board size is supported.
    pub fn validate(&self) -> Result<(), Error> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                size: self.board_size,
            })
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            autoplay_mode: false,
            check_mode: false,
            show_helpers: true,
            show_log: false,
            test_mode: false,
            use_defaults: false,
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Settings:")?;
        writeln!(f, "  board_size: {}", self.board_size)?;
        writeln!(f, "  autoplay: {}", self.autoplay_mode)?;
        writeln!(f, "  check_mode: {}", self.check_mode)?;
        writeln!(f, "  use_defaults: {}", self.use_defaults)?;
        writeln!(f, "  show_helpers: {}", self.show_helpers)?;
        writeln!(f, "  show_log: {}", self.show_log)?;
        write!(f, "  test_mode: {}", self.test_mode)
    }
}
