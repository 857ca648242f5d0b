//! Move selection: how a player picks one of the legal moves.
//!
//! The game loop only ever asks "which of these moves?" through [`MoveSelector`],
//! so interactive input lives outside the engine and tests can script games.

use crate::{Board, Error, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::ops::Range;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Who is making the decisions for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => f.write_str("Human   "),
            Self::Computer => f.write_str("Computer"),
        }
    }
}

/// A player-facing interface for choosing moves.
pub trait MoveSelector {
    /// Whether a human or the computer is behind this selector.
    fn kind(&self) -> PlayerKind;

    /// Pick one of `moves` for the position on `board`.
    /// `moves` is never empty and is sorted best first.
    fn select<'a>(&mut self, board: &Board, moves: &'a [Move]) -> Result<&'a Move, Error>;
}

/// How the computer chooses between legal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Always take the first move of the sorted list.
    FirstChoice,
    /// Take a uniformly random move.
    Random,
}

/// The computer player.
pub struct Computer {
    strategy: Strategy,
    rng: StdRng,
    think_time_ms: Option<Range<u64>>,
}

impl Computer {
    /// A computer that always plays the first sorted move without delay.
    pub fn deterministic() -> Self {
        Self {
            strategy: Strategy::FirstChoice,
            rng: StdRng::from_entropy(),
            think_time_ms: None,
        }
    }

    /// A computer that plays uniformly random moves.
    pub fn random() -> Self {
        Self {
            strategy: Strategy::Random,
            rng: StdRng::from_entropy(),
            think_time_ms: None,
        }
    }

    /// A random computer with a fixed seed, for reproducible playouts.
    pub fn seeded(seed: u64) -> Self {
        Self {
            strategy: Strategy::Random,
            rng: StdRng::seed_from_u64(seed),
            think_time_ms: None,
        }
    }

    /// Pause for a random duration within `range` (milliseconds) before every move.
    pub fn with_think_time(mut self, range: Range<u64>) -> Self {
        self.think_time_ms = Some(range).filter(|range| !range.is_empty());
        self
    }

    /// The computer used for a game: deterministic and instant in test mode,
    /// otherwise random with a short thinking pause.
    pub fn for_mode(test_mode: bool) -> Self {
        if test_mode {
            Self::deterministic()
        } else {
            Self::random().with_think_time(1000..2000)
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl MoveSelector for Computer {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }

    fn select<'a>(&mut self, _board: &Board, moves: &'a [Move]) -> Result<&'a Move, Error> {
        if let Some(range) = self.think_time_ms.clone() {
            thread::sleep(Duration::from_millis(self.rng.gen_range(range)));
        }

        let chosen = match self.strategy {
            Strategy::FirstChoice => moves.first(),
            Strategy::Random => moves.choose(&mut self.rng),
        };

        // The game loop never asks for a move out of an empty list.
        let chosen = chosen.expect("computer asked to choose from an empty move list");
        debug!(strategy = ?self.strategy, %chosen, "computer chose move");
        Ok(chosen)
    }
}
