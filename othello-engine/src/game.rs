//! Implements game-level Othello logic: players, rounds, termination and the game log.
//!
//! A round is one turn for black followed by one turn for white. Whether another
//! round is played is decided only at the start of a round, from the state left
//! by the previous one.

use crate::{Board, Disk, Error, Move, MoveSelector, PlayerKind};
use std::fmt;
use tracing::{debug, info};

/// One of the two sides in a game, together with whoever chooses its moves.
pub struct Player {
    disk: Disk,
    can_play: bool,
    moves_played: usize,
    selector: Box<dyn MoveSelector>,
}

impl Player {
    /// Create a player for `disk`. Panics if `disk` is empty.
    pub fn new(disk: Disk, selector: Box<dyn MoveSelector>) -> Self {
        assert!(!disk.is_empty(), "a player needs a disk color");
        Self {
            disk,
            can_play: true,
            moves_played: 0,
            selector,
        }
    }

    #[inline]
    pub fn disk(&self) -> Disk {
        self.disk
    }

    /// Whether this player had a legal move on its latest turn.
    #[inline]
    pub fn can_play(&self) -> bool {
        self.can_play
    }

    #[inline]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn kind(&self) -> PlayerKind {
        self.selector.kind()
    }

    pub fn is_human(&self) -> bool {
        self.kind() == PlayerKind::Human
    }

    /// Hand control of this player to a different selector.
    pub fn set_selector(&mut self, selector: Box<dyn MoveSelector>) {
        self.selector = selector;
    }

    /// Reset status for a new game.
    pub fn reset(&mut self) {
        self.can_play = true;
        self.moves_played = 0;
    }

    /// Play one turn on `board`: choose and place a move, or pass when there is none.
    pub fn play_one_move(&mut self, board: &mut Board) -> Result<TurnOutcome, Error> {
        let moves = board.possible_moves(self.disk);
        if moves.is_empty() {
            self.can_play = false;
            debug!(disk = %self.disk, "no moves available, passing");
            return Ok(TurnOutcome::Pass);
        }

        self.can_play = true;
        let chosen = self.selector.select(board, &moves)?.clone();
        board.place(&chosen);
        self.moves_played += 1;
        debug!(
            disk = %self.disk,
            square = %chosen.square,
            value = chosen.value,
            "placed disk"
        );
        Ok(TurnOutcome::Placed(chosen))
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("disk", &self.disk)
            .field("kind", &self.kind())
            .field("can_play", &self.can_play)
            .field("moves_played", &self.moves_played)
            .finish()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | Moves: {}",
            self.disk,
            self.kind(),
            self.moves_played
        )
    }
}

/// What happened on a single turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Placed(Move),
    Pass,
}

/// The ordered record of every placed move, with the board after each one.
/// Passes are not recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameLog(Vec<String>);

impl GameLog {
    /// Record a move and the board it produced as `<move>;<board>`.
    pub fn record(&mut self, mv: &Move, board: &Board) {
        self.0.push(format!("{};{}", mv.log_entry(), board.log_entry()));
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }
}

/// The log as displayed and fingerprinted: `NN: <line>`, numbered from 1, newline separated.
impl fmt::Display for GameLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{:02}: {}", index + 1, line)?;
        }
        Ok(())
    }
}

/// The final state of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// The color with more disks, or Empty for a tie.
    pub winner: Disk,
    pub black_disks: usize,
    pub white_disks: usize,
    pub rounds: usize,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Disk::Empty => f.write_str("The game ended in a tie...")?,
            winner => write!(f, "The winner is {}!", winner)?,
        }
        write!(f, " ({} | {})", self.black_disks, self.white_disks)
    }
}

/// The complete state of an Othello game, and of a series of games on the same board size.
#[derive(Debug)]
pub struct Othello {
    board: Board,
    black: Player,
    white: Player,
    log: GameLog,
    rounds_played: usize,
    games_played: usize,
}

impl Othello {
    /// Start a game on a `board_size` board. Black moves first.
    pub fn new(
        board_size: usize,
        black: Box<dyn MoveSelector>,
        white: Box<dyn MoveSelector>,
    ) -> Result<Self, Error> {
        Ok(Self {
            board: Board::new(board_size)?,
            black: Player::new(Disk::Black, black),
            white: Player::new(Disk::White, white),
            log: GameLog::default(),
            rounds_played: 0,
            games_played: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Number of games finished so far. Survives [`Othello::reset`].
    pub fn games_played(&self) -> usize {
        self.games_played
    }

    /// Get the player for `disk`. Panics if `disk` is empty.
    pub fn player(&self, disk: Disk) -> &Player {
        match disk {
            Disk::Black => &self.black,
            Disk::White => &self.white,
            Disk::Empty => panic!("no player plays empty disks"),
        }
    }

    /// Get the player for `disk` mutably. Panics if `disk` is empty.
    pub fn player_mut(&mut self, disk: Disk) -> &mut Player {
        match disk {
            Disk::Black => &mut self.black,
            Disk::White => &mut self.white,
            Disk::Empty => panic!("no player plays empty disks"),
        }
    }

    /// Returns true if another round should be played: the board has empty squares
    /// and at least one player could move during the previous round.
    pub fn can_continue(&self) -> bool {
        self.board.can_play() && (self.black.can_play || self.white.can_play)
    }

    /// Begin the next round and return its 1-based number.
    pub fn start_round(&mut self) -> usize {
        self.rounds_played += 1;
        self.rounds_played
    }

    /// Play a turn for `disk`, recording placed moves in the log.
    pub fn play_turn(&mut self, disk: Disk) -> Result<TurnOutcome, Error> {
        let player = match disk {
            Disk::Black => &mut self.black,
            Disk::White => &mut self.white,
            Disk::Empty => panic!("no player plays empty disks"),
        };

        let outcome = player.play_one_move(&mut self.board)?;
        if let TurnOutcome::Placed(mv) = &outcome {
            self.log.record(mv, &self.board);
        }
        Ok(outcome)
    }

    /// Play a full round: black's turn, then white's.
    pub fn play_round(&mut self) -> Result<[TurnOutcome; 2], Error> {
        self.start_round();
        let black = self.play_turn(Disk::Black)?;
        let white = self.play_turn(Disk::White)?;
        Ok([black, white])
    }

    /// Play rounds until the game is over, then finish it.
    pub fn play_game(&mut self) -> Result<GameSummary, Error> {
        while self.can_continue() {
            self.play_round()?;
        }
        Ok(self.finish())
    }

    /// Count the game as played and summarize the final position.
    pub fn finish(&mut self) -> GameSummary {
        self.games_played += 1;
        let (black_disks, white_disks) = self.board.player_scores();
        let summary = GameSummary {
            winner: self.board.result(),
            black_disks,
            white_disks,
            rounds: self.rounds_played,
        };
        info!(
            winner = %summary.winner,
            black = black_disks,
            white = white_disks,
            rounds = summary.rounds,
            games = self.games_played,
            "game finished"
        );
        summary
    }

    /// Prepare a new game on a fresh board of the same size.
    pub fn reset(&mut self) {
        self.board.reset();
        self.black.reset();
        self.white.reset();
        self.log.clear();
        self.rounds_played = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Computer;

    fn deterministic_game(size: usize) -> Othello {
        Othello::new(
            size,
            Box::new(Computer::deterministic()),
            Box::new(Computer::deterministic()),
        )
        .unwrap()
    }

    #[test]
    fn new_game_rejects_bad_size() {
        let result = Othello::new(
            2,
            Box::new(Computer::deterministic()),
            Box::new(Computer::deterministic()),
        );
        assert_eq!(result.err(), Some(Error::OutOfRange { size: 2 }));
    }

    #[test]
    fn first_turn_places_and_logs() {
        let mut game = deterministic_game(4);
        game.start_round();
        let outcome = game.play_turn(Disk::Black).unwrap();
        match outcome {
            TurnOutcome::Placed(mv) => assert_eq!(mv.log_entry(), "B:(0,1),1"),
            TurnOutcome::Pass => panic!("black has moves at the start"),
        }
        assert_eq!(game.log().lines(), ["B:(0,1),1;____BBB__BW_____"]);
        assert_eq!(game.player(Disk::Black).moves_played(), 1);
        assert_eq!(game.player(Disk::White).moves_played(), 0);
    }

    #[test]
    fn pass_is_not_logged() {
        let mut game = deterministic_game(4);
        // Swap in a position where black has no moves.
        game.board = "BWWW____________".parse().unwrap();
        assert_eq!(game.play_turn(Disk::Black).unwrap(), TurnOutcome::Pass);
        assert!(!game.player(Disk::Black).can_play());
        assert!(game.log().is_empty());
    }

    #[test]
    fn full_board_stops_the_game() {
        let mut game = deterministic_game(4);
        game.board = "WWWBWWWBWWWWBBBW".parse().unwrap();
        assert!(game.player(Disk::Black).can_play());
        assert!(!game.can_continue());
    }

    #[test]
    fn round_after_both_pass_ends_the_game() {
        let mut game = deterministic_game(4);
        game.board = "BBBB____________".parse().unwrap();
        assert!(game.can_continue());

        let outcomes = game.play_round().unwrap();
        assert_eq!(outcomes, [TurnOutcome::Pass, TurnOutcome::Pass]);
        assert!(!game.can_continue());
        assert_eq!(game.rounds_played(), 1);
    }

    #[test]
    fn white_still_takes_its_turn_after_board_fills() {
        let mut game = deterministic_game(4);
        game.board = "WWWBWWWBWWWWBBB_".parse().unwrap();

        let outcomes = game.play_round().unwrap();
        assert!(matches!(outcomes[0], TurnOutcome::Placed(_)));
        assert_eq!(outcomes[1], TurnOutcome::Pass);
        assert!(!game.board().can_play());
        assert!(!game.can_continue());
        assert_eq!(game.log().len(), 1);
    }

    #[test]
    fn game_runs_to_completion() {
        let mut game = deterministic_game(6);
        let summary = game.play_game().unwrap();
        assert!(!game.can_continue());
        assert_eq!(game.games_played(), 1);
        assert_eq!(summary.black_disks + summary.white_disks, {
            let (black, white) = game.board().player_scores();
            black + white
        });
        assert_eq!(
            game.log().len(),
            game.player(Disk::Black).moves_played() + game.player(Disk::White).moves_played()
        );
    }

    #[test]
    fn reset_keeps_games_played() {
        let mut game = deterministic_game(4);
        game.play_game().unwrap();
        game.reset();
        assert_eq!(game.games_played(), 1);
        assert_eq!(game.rounds_played(), 0);
        assert!(game.log().is_empty());
        assert_eq!(game.board(), &Board::new(4).unwrap());
        assert!(game.player(Disk::White).can_play());
        assert_eq!(game.player(Disk::White).moves_played(), 0);
    }

    #[test]
    fn log_formatting() {
        let mut game = deterministic_game(4);
        game.play_round().unwrap();
        assert_eq!(
            game.log().to_string(),
            "01: B:(0,1),1;____BBB__BW_____\n02: W:(0,0),1;W___BWB__BW_____"
        );
    }

    #[test]
    fn player_display() {
        let game = deterministic_game(4);
        assert_eq!(
            game.player(Disk::Black).to_string(),
            "BLACK | Computer | Moves: 0"
        );
    }

    #[test]
    fn summary_display() {
        let summary = GameSummary {
            winner: Disk::White,
            black_disks: 3,
            white_disks: 13,
            rounds: 6,
        };
        assert_eq!(summary.to_string(), "The winner is WHITE! (3 | 13)");
    }
}
