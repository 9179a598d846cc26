use clap::ValueEnum;
use noughts::{best_move, Board, Mark};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// The built-in players the judge can field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Plays the exhaustive-minimax move; never loses.
    Perfect,
    /// Plays a uniformly random empty cell.
    Random,
}

pub struct Player {
    pub name: String,
    kind: PlayerKind,
}

impl Player {
    pub fn new(kind: PlayerKind) -> Self {
        let name = match kind {
            PlayerKind::Perfect => "perfect",
            PlayerKind::Random => "random",
        };
        Self {
            name: String::from(name),
            kind,
        }
    }

    /// Picks a cell for `to_move`. The game must not be decided yet.
    pub fn choose_move(&self, rng: &mut StdRng, board: &mut Board, to_move: Mark) -> usize {
        match self.kind {
            PlayerKind::Perfect => best_move(board, to_move),
            PlayerKind::Random => {
                let empty: Vec<usize> = board.empty_cells().collect();
                *empty.choose(rng).unwrap() // Undecided boards have empty cells
            }
        }
    }
}
