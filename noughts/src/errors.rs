use crate::Mark;

/// The error type for [`Board::apply`](crate::Board::apply) and
/// [`Board::undo`](crate::Board::undo).
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfBounds { cell: usize },
    CellOccupied { cell: usize, by: Mark },
    CellVacant { cell: usize },
}

impl std::error::Error for InvalidMove {}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::OutOfBounds { cell } => {
                write!(f, "Cell index {} is outside the 3x3 board", cell)
            }
            InvalidMove::CellOccupied { cell, by } => {
                write!(f, "Cell {} is already occupied by {}", cell, by)
            }
            InvalidMove::CellVacant { cell } => {
                write!(f, "Cell {} is empty, there is no move to undo", cell)
            }
        }
    }
}
