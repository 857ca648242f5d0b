//! Run whole games without a terminal.

use crate::{Computer, Error, GameSummary, Othello};

/// Play a game where both sides always take the first sorted move.
pub fn play_deterministic(size: usize) -> Result<(Othello, GameSummary), Error> {
    let mut game = Othello::new(
        size,
        Box::new(Computer::deterministic()),
        Box::new(Computer::deterministic()),
    )?;
    let summary = game.play_game()?;
    Ok((game, summary))
}

/// Play a game between two random computers seeded from `seed`.
pub fn play_seeded(size: usize, seed: u64) -> Result<(Othello, GameSummary), Error> {
    let mut game = Othello::new(
        size,
        Box::new(Computer::seeded(seed)),
        Box::new(Computer::seeded(seed.wrapping_add(1))),
    )?;
    let summary = game.play_game()?;
    Ok((game, summary))
}
