//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Disk, Error};

/// Count the leaves `depth` plies below the starting position of a `size` board.
/// A forced pass counts as a ply; two passes in a row end the line.
pub fn run_perft(size: usize, depth: u64) -> Result<u64, Error> {
    Ok(leaves_below(&Board::new(size)?, Disk::Black, depth, false))
}

fn leaves_below(board: &Board, disk: Disk, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.possible_moves(disk);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !disk, depth - 1, true);
    }

    all_moves
        .iter()
        .map(|mv| {
            let mut next = board.clone();
            next.place(mv);
            leaves_below(&next, !disk, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(8, 1), Ok(4));
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(8, 2), Ok(12));
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(8, 3), Ok(56));
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(8, 4), Ok(244));
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(8, 5), Ok(1396));
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(8, 6), Ok(8200));
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(8, 7), Ok(55092));
}

#[test]
fn perft_small_board_opening() {
    assert_eq!(run_perft(4, 1), Ok(4));
}

#[test]
fn perft_bad_size() {
    assert_eq!(run_perft(12, 1), Err(Error::OutOfRange { size: 12 }));
}
