use crate::{Board, Mark};

/// Renders the board as a bordered 3x3 grid, with `·` for empty cells.
///
/// Diagnostic output only; interactive rendering belongs to whatever
/// frontend drives the game.
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::from("╭───────╮");
    for row in 0..3 {
        result += "\n│";
        for col in 0..3 {
            result += match board.get(row * 3 + col) {
                Some(Mark::X) => " X",
                Some(Mark::O) => " O",
                None => " ·",
            };
        }
        result += " │";
    }
    result += "\n╰───────╯";
    result
}
