//! Legal move generation by scanning lines out of every empty square.

use crate::{Board, Disk, Square, Step, STEP_DIRECTIONS};
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

/// A line of disks captured by a move: `count` squares starting one `step` away.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Direction {
    pub step: Step,
    pub count: usize,
}

impl Direction {
    pub const fn new(step: Step, count: usize) -> Self {
        Self { step, count }
    }
}

/// One legal disk placement and everything it captures.
///
/// `value` is the total number of captured disks, which is the sum of the
/// direction counts.
#[derive(Clone, Debug)]
pub struct Move {
    pub square: Square,
    pub disk: Disk,
    pub value: usize,
    pub directions: Vec<Direction>,
}

impl Move {
    /// Format the move for the game log: `B:(x,y),value`.
    pub fn log_entry(&self) -> String {
        format!("{}:{},{}", self.disk.board_char(), self.square, self.value)
    }

    /// Get all the squares this move flips, sorted.
    pub fn affected_squares(&self) -> Vec<Square> {
        let mut squares: Vec<Square> = Vec::with_capacity(self.value);
        for &Direction { step, count } in &self.directions {
            let mut square = self.square + step;
            for _ in 0..count {
                squares.push(square);
                square += step;
            }
        }
        squares.sort();
        squares
    }
}

/// Moves order by value, best first, then by square. The disk only breaks ties
/// between moves of different colors, which never share a move list.
impl Ord for Move {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .value
            .cmp(&self.value)
            .then(self.square.cmp(&other.square))
            .then(self.disk.cmp(&other.disk))
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.square == other.square && self.value == other.value && self.disk == other.disk
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.square, self.value)
    }
}

impl Board {
    /// Get the legal moves for `disk`, sorted best first (see [`Move`]'s ordering).
    ///
    /// A direction captures when it starts on an opponent disk, continues over opponent
    /// disks, and ends on one of the mover's own disks. An empty square or the edge
    /// of the board ends the line without a capture.
    pub fn possible_moves(&self, disk: Disk) -> Vec<Move> {
        // Empty would scan forever past the edge, which also reads as empty.
        if disk.is_empty() {
            return Vec::new();
        }

        let opponent = disk.opponent();
        let mut moves: Vec<Move> = Vec::new();

        for square in self.empty_squares() {
            let mut value = 0;
            let mut directions: Vec<Direction> = Vec::new();

            for &step in &STEP_DIRECTIONS {
                let mut pos = square + step;
                if self.get(pos) != opponent {
                    continue;
                }

                let mut count = 0;
                while self.get(pos) == opponent {
                    count += 1;
                    pos += step;
                }

                if self.get(pos) == disk {
                    directions.push(Direction::new(step, count));
                    value += count;
                }
            }

            if value > 0 {
                moves.push(Move {
                    square,
                    disk,
                    value,
                    directions,
                });
            }
        }

        moves.sort();
        trace!(%disk, count = moves.len(), "generated moves");
        moves
    }
}
