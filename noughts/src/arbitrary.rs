use quickcheck::{Arbitrary, Gen};

use crate::{Board, GameOutcome, Mark};

impl Arbitrary for Mark {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Mark::X, Mark::O]).unwrap()
    }
}

/// A board reached by replaying a random number of random legal moves
/// from the empty board, together with the side whose turn it is.
///
/// Replaying stops early if the game is decided, so every generated
/// board is one that legal play can actually produce.
#[derive(Clone, Debug)]
pub struct PlayedGame {
    pub board: Board,
    pub to_move: Mark,
}

impl Arbitrary for PlayedGame {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut board = Board::new();
        let mut to_move = Mark::X;
        let num_moves = usize::arbitrary(g) % 10;
        for _ in 0..num_moves {
            if board.outcome() != GameOutcome::InProgress {
                break;
            }
            let empty: Vec<usize> = board.empty_cells().collect();
            let cell = *g.choose(&empty).unwrap();
            board.apply(cell, to_move).unwrap();
            to_move = to_move.opponent();
        }
        PlayedGame { board, to_move }
    }
}
