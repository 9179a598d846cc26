use serde::{Deserialize, Serialize};

use crate::errors::InvalidMove;

/// Number of cells on the board.
pub const NUM_CELLS: usize = 9;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One of the two marks. `X` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark of the other player.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Whether a game is still going, and who won if it isn't.
///
/// Always recomputed from the board contents, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Win(Mark),
    Tie,
}

/// A 3x3 board in row-major order (`index = row * 3 + col`).
///
/// A cell is `None` until a mark is played on it. The only way a cell
/// goes back to `None` is [`Board::undo`], which exists so that the
/// search engine can rewind speculative moves; after any apply/undo
/// pair the board is bit-identical to its prior state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; NUM_CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_CELLS],
        }
    }

    /// The mark at `cell`, or `None` if the cell is empty or the index
    /// is out of range.
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Option<Mark>; NUM_CELLS] {
        &self.cells
    }

    /// Places `mark` on an empty cell.
    ///
    /// Rejects out-of-range indices and occupied cells, so untrusted
    /// input can be fed to it directly.
    pub fn apply(&mut self, cell: usize, mark: Mark) -> Result<(), InvalidMove> {
        match self.cells.get(cell) {
            None => Err(InvalidMove::OutOfBounds { cell }),
            Some(Some(by)) => Err(InvalidMove::CellOccupied { cell, by: *by }),
            Some(None) => {
                self.cells[cell] = Some(mark);
                Ok(())
            }
        }
    }

    /// Reverts a cell to empty, undoing a previous [`Board::apply`].
    pub fn undo(&mut self, cell: usize) -> Result<(), InvalidMove> {
        match self.cells.get(cell) {
            None => Err(InvalidMove::OutOfBounds { cell }),
            Some(None) => Err(InvalidMove::CellVacant { cell }),
            Some(Some(_)) => {
                self.cells[cell] = None;
                Ok(())
            }
        }
    }

    /// The indices of all empty cells, in ascending order.
    ///
    /// The ordering matters: the search engine breaks score ties in
    /// favor of the first candidate it visits.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(cell, _)| cell)
    }

    /// Whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Whether no move has been played yet.
    pub fn is_untouched(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Scans the 8 winning lines and reports the state of the game.
    ///
    /// A board reached through legal play holds at most one winning
    /// mark, so returning the first fully-marked line found is enough.
    pub fn outcome(&self) -> GameOutcome {
        for [a, b, c] in LINES {
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return GameOutcome::Win(mark);
                }
            }
        }
        if self.is_full() {
            GameOutcome::Tie
        } else {
            GameOutcome::InProgress
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
