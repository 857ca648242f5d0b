//! Line-based terminal I/O shared by the session driver and human players.

use othello_engine::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// A console shared between the session and any human players reading from it.
pub type SharedConsole<R, W> = Rc<RefCell<Console<R, W>>>;

/// A prompt-and-answer terminal over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Wrap the console for sharing.
    pub fn shared(self) -> SharedConsole<R, W> {
        Rc::new(RefCell::new(self))
    }

    /// Write one line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print `message` and read one line of input, without its line ending.
    /// Returns None once the input is exhausted.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Ask a question with two options; true if the answer is `yes`.
    pub fn ask(&mut self, question: &str, yes: &str, no: &str) -> io::Result<bool> {
        let answer = self.prompt(&format!("{} ({}/{})? ", question, yes, no))?;
        Ok(answer.map_or(false, |answer| answer.trim().to_lowercase() == yes))
    }

    /// Ask for a board size. Out-of-range sizes are clamped into range,
    /// anything unparseable falls back to the default.
    pub fn ask_board_size(&mut self) -> io::Result<usize> {
        let answer = self.prompt(&format!(
            "Choose board size (default is {}): ",
            DEFAULT_BOARD_SIZE
        ))?;

        match answer.and_then(|answer| answer.trim().parse::<usize>().ok()) {
            Some(size) => {
                if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
                    self.say(format!(
                        "Limiting board size to valid range {}..{}",
                        MIN_BOARD_SIZE, MAX_BOARD_SIZE
                    ))?;
                }
                Ok(size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE))
            }
            None => {
                self.say(format!(
                    "Warning: Invalid size, defaulting to {}...",
                    DEFAULT_BOARD_SIZE
                ))?;
                Ok(DEFAULT_BOARD_SIZE)
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
