//! The interactive command-line session: sets up players, prints every turn and
//! offers another game when one ends.

use crate::connectors::{HumanSelector, SharedConsole};
use crate::fingerprint::log_fingerprint;
use anyhow::{Context, Result};
use othello_engine::{Computer, Disk, GameSummary, MoveSelector, Othello, Settings, TurnOutcome};
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Who controls each color for the next game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lineup {
    /// Both sides are played by the computer.
    Autoplay,
    /// A person plays `human` against the computer.
    Against { human: Disk },
    /// Two people share the console.
    HotSeat,
}

pub struct Session<R, W> {
    settings: Settings,
    game: Othello,
    console: SharedConsole<R, W>,
}

impl<R: BufRead + 'static, W: Write + 'static> Session<R, W> {
    /// Create a session. Fails if the board size in `settings` is unsupported.
    pub fn new(settings: Settings, console: SharedConsole<R, W>) -> Result<Self> {
        settings.validate()?;
        let black = Box::new(HumanSelector::new(console.clone(), settings.show_helpers));
        let white = Box::new(Computer::for_mode(settings.test_mode));
        let game = Othello::new(settings.board_size, black, white)?;
        debug!(%settings, "session created");

        Ok(Self {
            settings,
            game,
            console,
        })
    }

    pub fn game(&self) -> &Othello {
        &self.game
    }

    /// Play games until the user declines another one. Autoplay sessions play exactly one.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.start_game()?;
            self.play_rounds()?;
            let summary = self.game.finish();
            self.print_result(&summary)?;
            if self.settings.show_log {
                self.print_log()?;
            }

            if self.settings.autoplay_mode
                || !self.ask("Would you like to play again", "y", "n")?
            {
                break;
            }
        }
        info!(games = self.game.games_played(), "session finished");
        Ok(())
    }

    fn start_game(&mut self) -> Result<()> {
        if self.game.games_played() > 0 {
            self.game.reset();
        }

        let lineup = self.choose_lineup()?;
        debug!(?lineup, "players chosen");
        for disk in [Disk::Black, Disk::White] {
            let selector = self.selector_for(disk, lineup);
            self.game.player_mut(disk).set_selector(selector);
        }

        if !self.settings.check_mode {
            self.say("\nPlayers:")?;
            self.print_status()?;
        }
        Ok(())
    }

    fn choose_lineup(&mut self) -> Result<Lineup> {
        if self.settings.autoplay_mode {
            return Ok(Lineup::Autoplay);
        }
        if self.settings.use_defaults {
            return Ok(Lineup::Against { human: Disk::Black });
        }
        if !self.ask("Would you like to play against the computer", "y", "n")? {
            return Ok(Lineup::HotSeat);
        }
        let human = if self.ask("Would you like to play as black or white", "b", "w")? {
            Disk::Black
        } else {
            Disk::White
        };
        Ok(Lineup::Against { human })
    }

    fn selector_for(&self, disk: Disk, lineup: Lineup) -> Box<dyn MoveSelector> {
        let human = match lineup {
            Lineup::Autoplay => false,
            Lineup::Against { human } => human == disk,
            Lineup::HotSeat => true,
        };

        if human {
            Box::new(HumanSelector::new(
                self.console.clone(),
                self.settings.show_helpers && !self.settings.check_mode,
            ))
        } else {
            Box::new(Computer::for_mode(self.settings.test_mode))
        }
    }

    fn play_rounds(&mut self) -> Result<()> {
        while self.game.can_continue() {
            let round = self.game.start_round();
            self.verbose(format!("\n=========== ROUND: {} ===========", round))?;

            for disk in [Disk::Black, Disk::White] {
                self.verbose(format!("Turn: {}", disk))?;
                if !self.game.player(disk).is_human() {
                    self.verbose("  Computer plays...")?;
                }

                // A human selector borrows the console while it reads, so nothing
                // may hold it across this call.
                let outcome = self
                    .game
                    .play_turn(disk)
                    .with_context(|| format!("{} failed to make a move", disk))?;

                match outcome {
                    TurnOutcome::Placed(mv) => {
                        if !self.game.player(disk).is_human() {
                            self.verbose(format!("  {}", mv))?;
                        }
                        let (black, white) = self.game.board().player_scores();
                        self.verbose(format!(
                            "\n{}\nScore: {} | {}",
                            self.game.board(),
                            black,
                            white
                        ))?;
                    }
                    TurnOutcome::Pass => self.verbose("  No moves available...")?,
                }
                self.verbose("--------------------------------")?;
            }
        }
        Ok(())
    }

    fn print_result(&self, summary: &GameSummary) -> Result<()> {
        if !self.settings.check_mode {
            self.say("\n================================")?;
            self.say("The game is finished!")?;
        }
        self.say("\nResult:")?;
        self.print_status()?;
        self.say("")?;
        self.say(summary)?;
        Ok(())
    }

    fn print_log(&self) -> Result<()> {
        let log = self.game.log();
        if !self.settings.check_mode {
            self.say("Game log:")?;
            self.say(log)?;
        }
        self.say(log_fingerprint(log))
    }

    fn print_status(&self) -> Result<()> {
        self.say(self.game.player(Disk::Black))?;
        self.say(format!("{}\n", self.game.player(Disk::White)))?;
        self.say(self.game.board())
    }

    fn verbose(&self, text: impl Display) -> Result<()> {
        if self.settings.check_mode {
            return Ok(());
        }
        self.say(text)
    }

    fn say(&self, text: impl Display) -> Result<()> {
        self.console
            .borrow_mut()
            .say(text)
            .context("failed to write to the console")
    }

    fn ask(&self, question: &str, yes: &str, no: &str) -> Result<bool> {
        self.console
            .borrow_mut()
            .ask(question, yes, no)
            .context("failed to read from the console")
    }
}
