//! [`MoveSelector`] for a person typing coordinates at a console.

use super::SharedConsole;
use othello_engine::{Board, Error, Move, MoveSelector, PlayerKind, Square};
use std::io::{self, BufRead, Write};
use tracing::warn;

pub struct HumanSelector<R, W> {
    console: SharedConsole<R, W>,
    show_helpers: bool,
}

impl<R, W> HumanSelector<R, W> {
    /// A human reading from `console`. With `show_helpers`, the legal moves
    /// and their values are printed before every prompt.
    pub fn new(console: SharedConsole<R, W>, show_helpers: bool) -> Self {
        Self {
            console,
            show_helpers,
        }
    }
}

fn terminal_error(err: io::Error) -> Error {
    warn!(%err, "console failed while reading a move");
    Error::Terminal {
        message: err.to_string(),
    }
}

impl<R: BufRead, W: Write> MoveSelector for HumanSelector<R, W> {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn select<'a>(&mut self, board: &Board, moves: &'a [Move]) -> Result<&'a Move, Error> {
        let mut console = self.console.borrow_mut();

        if self.show_helpers {
            console
                .say(format!("  Possible moves ({}):", moves.len()))
                .map_err(terminal_error)?;
            for mv in moves {
                console.say(format!("  {}", mv)).map_err(terminal_error)?;
            }
            console
                .say(board.move_hints(moves))
                .map_err(terminal_error)?;
        }

        loop {
            let line = console
                .prompt("  Give disk position (x,y): ")
                .map_err(terminal_error)?
                .ok_or(Error::InputClosed)?;

            let square: Square = match line.parse() {
                Ok(square) => square,
                Err(err) => {
                    console.say(format!("  Error: {}", err)).map_err(terminal_error)?;
                    continue;
                }
            };

            // Only squares from the generated list are playable.
            if let Some(valid_move) = moves.iter().find(|mv| mv.square == square) {
                return Ok(valid_move);
            }

            let illegal = Error::IllegalMove {
                disk: moves[0].disk,
                square,
            };
            console
                .say(format!("  Error: {}!", illegal))
                .map_err(terminal_error)?;
        }
    }
}
