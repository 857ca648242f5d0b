//! Board invariants checked along random playouts.

use othello_engine::{Board, Disk, Move, Square};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn check_counts(board: &Board) {
    let size = board.size();
    let (black, white) = board.player_scores();
    let empties = board.empty_squares().count();

    assert_eq!(board.score(), white as i32 - black as i32);
    assert_eq!(black + white, size * size - empties);
    assert_eq!(board.can_play(), empties > 0);

    for square in board.empty_squares() {
        assert_eq!(board.disk_at(square), Ok(Disk::Empty));
    }
    let empty_cells = (0..size * size)
        .map(|index| Square::from_index(index, size))
        .filter(|&square| board.get(square) == Disk::Empty)
        .count();
    assert_eq!(empty_cells, empties);
}

fn check_moves(board: &Board, disk: Disk, moves: &[Move]) {
    for mv in moves {
        assert!(mv.value >= 1);
        assert_eq!(mv.disk, disk);
        assert_eq!(board.get(mv.square), Disk::Empty);
        assert_eq!(
            mv.directions.iter().map(|dir| dir.count).sum::<usize>(),
            mv.value
        );

        for direction in &mv.directions {
            let mut square = mv.square + direction.step;
            for _ in 0..direction.count {
                assert_eq!(board.get(square), disk.opponent());
                square += direction.step;
            }
            assert_eq!(board.get(square), disk);
        }
    }

    for pair in moves.windows(2) {
        assert!(pair[0].value >= pair[1].value);
        if pair[0].value == pair[1].value {
            assert!(pair[0].square < pair[1].square);
        }
    }
}

fn check_placement(board: &Board, mv: &Move) {
    assert_eq!(board.get(mv.square), mv.disk);
    assert!(board.empty_squares().all(|square| square != mv.square));
    for square in mv.affected_squares() {
        assert_eq!(board.get(square), mv.disk);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_playout_keeps_invariants(size in 4usize..=10, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new(size).unwrap();
        let mut disk = Disk::Black;
        let mut passes = 0;

        check_counts(&board);
        while board.can_play() && passes < 2 {
            let moves = board.possible_moves(disk);
            check_moves(&board, disk, &moves);

            match moves.choose(&mut rng) {
                Some(mv) => {
                    let before = board.score();
                    board.place(mv);
                    check_placement(&board, mv);
                    let swing = 2 * mv.value as i32 + 1;
                    prop_assert_eq!(board.score(), before + disk.value() * swing);
                    passes = 0;
                }
                None => passes += 1,
            }

            check_counts(&board);
            disk = !disk;
        }
    }
}
