//! Board state: the grid of disks and the set of squares that are still empty.
//!
//! The empty set is kept in step with the grid by [`Board::place`], which is the
//! only way to mutate a board after construction. Move generation lives in
//! [`movegen.rs`] and only reads the board.

use crate::movegen::Move;
use crate::utils;
use crate::{Disk, Error, Square, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use derive_more::Display;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// An N×N Othello board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<Disk>,
    empty_squares: HashSet<Square>,
}

impl Board {
    /// Create a board with the four starting disks in the center.
    pub fn new(size: usize) -> Result<Self, Error> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(Error::OutOfRange { size });
        }
        Ok(Self::from_grid(size, Self::starting_grid(size)))
    }

    /// Build a board around an existing grid, deriving the empty set from it.
    fn from_grid(size: usize, grid: Vec<Disk>) -> Self {
        debug_assert_eq!(grid.len(), size * size);
        let empty_squares = grid
            .iter()
            .enumerate()
            .filter(|(_, disk)| disk.is_empty())
            .map(|(index, _)| Square::from_index(index, size))
            .collect();

        Self {
            size,
            grid,
            empty_squares,
        }
    }

    /// The starting layout: two disks per color, alternating diagonally around the center.
    /// Odd sizes shift the block up and left by one.
    fn starting_grid(size: usize) -> Vec<Disk> {
        let mut grid = vec![Disk::Empty; size * size];
        let row = if size % 2 == 0 {
            (size - 1) / 2
        } else {
            (size - 1) / 2 - 1
        };
        let col = size / 2;

        grid[row * size + row] = Disk::White;
        grid[row * size + col] = Disk::Black;
        grid[col * size + row] = Disk::Black;
        grid[col * size + col] = Disk::White;
        grid
    }

    /// Put the board back into its starting layout.
    pub fn reset(&mut self) {
        *self = Self::from_grid(self.size, Self::starting_grid(self.size));
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true while there are empty squares left.
    #[inline]
    pub fn can_play(&self) -> bool {
        !self.empty_squares.is_empty()
    }

    /// Iterate the squares that are currently empty, in no particular order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.empty_squares.iter().copied()
    }

    /// Get the disk at `square`. Squares off the board read as empty,
    /// which ends line scans at the edge.
    #[inline]
    pub fn get(&self, square: Square) -> Disk {
        square
            .to_index(self.size)
            .map_or(Disk::Empty, |index| self.grid[index])
    }

    /// Get the disk at `square`, failing if it is not on the board.
    pub fn disk_at(&self, square: Square) -> Result<Disk, Error> {
        square
            .to_index(self.size)
            .map(|index| self.grid[index])
            .ok_or(Error::OutOfBounds { square })
    }

    /// Apply a move generated by [`Board::possible_moves`] for this position.
    ///
    /// Panics if the target square is occupied or any written square is off the board:
    /// either means the move did not come from this board.
    pub fn place(&mut self, mv: &Move) {
        let start = mv.square;
        let target = self
            .disk_at(start)
            .unwrap_or_else(|err| panic!("{}", err));
        assert!(
            target.is_empty(),
            "Trying to place disk to an occupied square: {}",
            start
        );

        self.set(start, mv.disk);
        self.empty_squares.remove(&start);

        for direction in &mv.directions {
            let mut square = start + direction.step;
            for _ in 0..direction.count {
                self.set(square, mv.disk);
                square += direction.step;
            }
        }
    }

    fn set(&mut self, square: Square, disk: Disk) {
        let index = square
            .to_index(self.size)
            .unwrap_or_else(|| panic!("Invalid coordinates: {}", square));
        self.grid[index] = disk;
    }

    /// Count black and white disks.
    pub fn player_scores(&self) -> (usize, usize) {
        self.grid
            .iter()
            .fold((0, 0), |(black, white), disk| match disk {
                Disk::Black => (black + 1, white),
                Disk::White => (black, white + 1),
                Disk::Empty => (black, white),
            })
    }

    /// Score the board as: # white disks - # black disks.
    pub fn score(&self) -> i32 {
        self.grid.iter().map(|disk| disk.value()).sum()
    }

    /// Get the color with more disks on the board, or Empty for a tie.
    pub fn result(&self) -> Disk {
        match self.score().cmp(&0) {
            Ordering::Greater => Disk::White,
            Ordering::Less => Disk::Black,
            Ordering::Equal => Disk::Empty,
        }
    }

    /// Serialize the board one character per cell, row-major, for the game log.
    pub fn log_entry(&self) -> String {
        self.grid.iter().map(|disk| disk.board_char()).collect()
    }

    /// Render the board with every legal move replaced by the number of disks it flips.
    pub fn move_hints<'a>(&'a self, moves: &'a [Move]) -> MoveHints<'a> {
        MoveHints { board: self, moves }
    }

    /// [`Board::move_hints`] as a string.
    pub fn format_moves(&self, moves: &[Move]) -> String {
        self.move_hints(moves).to_string()
    }
}

/// A board display that shows move values in the squares they can be played on.
pub struct MoveHints<'a> {
    board: &'a Board,
    moves: &'a [Move],
}

impl fmt::Display for MoveHints<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size;
        let mut cells: Vec<String> = self
            .board
            .grid
            .iter()
            .map(|disk| disk.board_char().to_string())
            .collect();
        for mv in self.moves {
            let index = mv.square.to_index(size).ok_or(fmt::Error)?;
            cells[index] = mv.value.to_string();
        }
        utils::format_grid(size, cells.into_iter(), f)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.size,
            self.grid.iter().map(|disk| disk.board_char()),
            f,
        )
    }
}

#[derive(Debug, PartialEq, Eq, derive_more::Error, Display)]
pub enum ParseBoardError {
    #[display(fmt = "board string length {} is not a square", len)]
    NotSquare { len: usize },
    #[display(fmt = "unsupported board size {}", size)]
    UnsupportedSize { size: usize },
    #[display(fmt = "unexpected board character '{}'", ch)]
    UnexpectedCharacter { ch: char },
}

/// Parse a board from the row-major serialization used in the game log
/// (`B`, `W` and `_`, one character per cell).
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        let size = (1..=MAX_BOARD_SIZE)
            .find(|size| size * size == len)
            .ok_or(ParseBoardError::NotSquare { len })?;
        if size < MIN_BOARD_SIZE {
            return Err(ParseBoardError::UnsupportedSize { size });
        }

        let grid = s
            .chars()
            .map(|ch| Disk::from_board_char(ch).ok_or(ParseBoardError::UnexpectedCharacter { ch }))
            .collect::<Result<Vec<Disk>, ParseBoardError>>()?;

        Ok(Self::from_grid(size, grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::Direction;
    use crate::Step;

    #[test]
    fn board_initialization() {
        let board = Board::new(8).unwrap();
        assert_eq!(board.size(), 8);
        assert_eq!(board.get(Square::new(3, 3)), Disk::White);
        assert_eq!(board.get(Square::new(4, 4)), Disk::White);
        assert_eq!(board.get(Square::new(3, 4)), Disk::Black);
        assert_eq!(board.get(Square::new(4, 3)), Disk::Black);
        assert_eq!(board.get(Square::new(0, 0)), Disk::Empty);
        assert_eq!(board.empty_squares().count(), 60);
    }

    #[test]
    fn odd_board_initialization() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.log_entry(), "______WB___BW____________");
        assert_eq!(board.empty_squares().count(), 21);
    }

    #[test]
    fn unsupported_sizes() {
        assert_eq!(Board::new(3), Err(Error::OutOfRange { size: 3 }));
        assert_eq!(Board::new(11), Err(Error::OutOfRange { size: 11 }));
        assert!(Board::new(4).is_ok());
        assert!(Board::new(10).is_ok());
    }

    #[test]
    fn out_of_bounds_reads() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.get(Square::new(-1, 0)), Disk::Empty);
        assert_eq!(board.get(Square::new(4, 4)), Disk::Empty);
        assert_eq!(
            board.disk_at(Square::new(4, 0)),
            Err(Error::OutOfBounds {
                square: Square::new(4, 0)
            })
        );
        assert_eq!(board.disk_at(Square::new(1, 1)), Ok(Disk::White));
    }

    #[test]
    fn scoring() {
        let board = Board::new(8).unwrap();
        assert_eq!(board.player_scores(), (2, 2));
        assert_eq!(board.score(), 0);
        assert_eq!(board.result(), Disk::Empty);

        let board: Board = "BBB_BWB__BW_____".parse().unwrap();
        assert_eq!(board.player_scores(), (6, 2));
        assert_eq!(board.score(), -4);
        assert_eq!(board.result(), Disk::Black);
    }

    #[test]
    fn log_entry() {
        let board = Board::new(8).unwrap();
        assert_eq!(
            board.log_entry(),
            "___________________________WB______BW___________________________"
        );
        assert_eq!(Board::new(4).unwrap().log_entry(), "_____WB__BW_____");
    }

    #[test]
    fn place_flips_recorded_lines() {
        let mut board = Board::new(4).unwrap();
        let mv = Move {
            square: Square::new(0, 1),
            disk: Disk::Black,
            value: 1,
            directions: vec![Direction::new(Step { x: 1, y: 0 }, 1)],
        };
        board.place(&mv);
        assert_eq!(board.log_entry(), "____BBB__BW_____");
        assert!(!board.empty_squares().any(|square| square == Square::new(0, 1)));
        assert_eq!(board.empty_squares().count(), 11);
    }

    #[test]
    #[should_panic(expected = "occupied square")]
    fn place_on_occupied_square() {
        let mut board = Board::new(4).unwrap();
        board.place(&Move {
            square: Square::new(1, 1),
            disk: Disk::Black,
            value: 1,
            directions: vec![Direction::new(Step { x: 1, y: 0 }, 1)],
        });
    }

    #[test]
    #[should_panic(expected = "Invalid coordinates")]
    fn place_off_board() {
        let mut board = Board::new(4).unwrap();
        board.place(&Move {
            square: Square::new(7, 0),
            disk: Disk::Black,
            value: 1,
            directions: Vec::new(),
        });
    }

    #[test]
    #[should_panic(expected = "Invalid coordinates")]
    fn place_line_running_off_board() {
        let mut board = Board::new(4).unwrap();
        board.place(&Move {
            square: Square::new(0, 0),
            disk: Disk::Black,
            value: 2,
            directions: vec![Direction::new(Step { x: -1, y: 0 }, 2)],
        });
    }

    #[test]
    fn move_hints_match_format_moves() {
        let board = Board::new(4).unwrap();
        let moves = board.possible_moves(Disk::White);
        assert_eq!(
            board.move_hints(&moves).to_string(),
            board.format_moves(&moves)
        );
        assert_eq!(
            board.move_hints(&[]).to_string(),
            board.to_string()
        );
    }

    #[test]
    fn reset_restores_start() {
        let mut board: Board = "BBB_BWB__BW_____".parse().unwrap();
        board.reset();
        assert_eq!(board, Board::new(4).unwrap());
    }

    #[test]
    fn full_board_cannot_play() {
        let board: Board = "WWWBWWWBWWWWBBBW".parse().unwrap();
        assert!(!board.can_play());
        assert_eq!(board.empty_squares().count(), 0);
    }

    #[test]
    fn board_from_str_fail() {
        assert_eq!(
            "BW_".parse::<Board>(),
            Err(ParseBoardError::NotSquare { len: 3 })
        );
        assert_eq!(
            "BW_W_____".parse::<Board>(),
            Err(ParseBoardError::UnsupportedSize { size: 3 })
        );
        assert_eq!(
            "_____WB__BX_____".parse::<Board>(),
            Err(ParseBoardError::UnexpectedCharacter { ch: 'X' })
        );
    }

    #[test]
    fn format_moves_marks_values() {
        let board = Board::new(4).unwrap();
        let moves = board.possible_moves(Disk::Black);
        assert_eq!(
            board.format_moves(&moves),
            "  0 1 2 3\n0 _ 1 _ _\n1 1 W B _\n2 _ B W 1\n3 _ _ 1 _"
        );
    }

    #[test]
    fn board_display() {
        let board = Board::new(4).unwrap();
        assert_eq!(
            board.to_string(),
            "  0 1 2 3\n0 _ _ _ _\n1 _ W B _\n2 _ B W _\n3 _ _ _ _"
        );
    }
}
