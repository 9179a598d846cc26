use crate::{Board, GameOutcome, Mark};

/// The cell played on a completely empty board.
///
/// A full search from the empty board visits hundreds of thousands of
/// positions only to learn that every opening draws under perfect
/// play, so the very first move of a game is hard-coded instead of
/// searched. This is a performance shortcut, not something the search
/// would derive on its own.
pub const OPENING_MOVE: usize = 0;

/// Picks the optimal cell for `to_move`, assuming both sides play
/// perfectly from here on.
///
/// The board is mutated while the game tree is explored, but every
/// speculative move is undone again; the board is bit-identical to
/// its prior state by the time this returns.
///
/// Panics if the game is already decided or the board is full. The
/// caller is expected to check [`Board::outcome`] first.
pub fn best_move(board: &mut Board, to_move: Mark) -> usize {
    if board.is_untouched() {
        return OPENING_MOVE;
    }
    let (_, cell) = minimax(board, to_move, to_move, 0);
    cell.unwrap() // A non-terminal board always yields a move
}

/// Exhaustive minimax over every game reachable from `board`.
///
/// `max_mark` is the side the scores favor: a win by `max_mark` found
/// at recursion depth `d` scores `10 - d`, a win by the other mark
/// scores `-(10 - d)`, and a tie scores `0`. Biasing by depth makes
/// the engine take the fastest win available and drag out a lost
/// position as long as possible. Terminal positions carry no move.
///
/// When several cells reach the same score, the lowest index wins:
/// candidates are visited in ascending order and only a strictly
/// better score displaces the current best.
pub fn minimax(
    board: &mut Board,
    to_move: Mark,
    max_mark: Mark,
    depth: u8,
) -> (i8, Option<usize>) {
    match board.outcome() {
        GameOutcome::Win(mark) => {
            let score = 10 - depth as i8;
            return (if mark == max_mark { score } else { -score }, None);
        }
        GameOutcome::Tie => return (0, None),
        GameOutcome::InProgress => {}
    }

    let maximizing = to_move == max_mark;
    // Child scores are bounded by ±(10 - (depth + 1)), so the first
    // candidate always displaces the sentinel.
    let mut best_score: i8 = if maximizing { -10 } else { 10 };
    let mut best_cell = None;

    let candidates: Vec<usize> = board.empty_cells().collect();
    for cell in candidates {
        board.apply(cell, to_move).unwrap(); // Came from empty_cells()
        let (score, _) = minimax(board, to_move.opponent(), max_mark, depth + 1);
        board.undo(cell).unwrap(); // Marked right above
        if maximizing && score > best_score || !maximizing && score < best_score {
            best_score = score;
            best_cell = Some(cell);
        }
    }

    (best_score, best_cell)
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::arbitrary::PlayedGame;

    /// Replays a move sequence with X going first.
    fn replay(moves: &[usize]) -> Board {
        let mut board = Board::new();
        let mut to_move = Mark::X;
        for &cell in moves {
            board.apply(cell, to_move).unwrap();
            to_move = to_move.opponent();
        }
        board
    }

    quickcheck! {
        fn search_restores_the_board(game: PlayedGame) -> TestResult {
            let PlayedGame { mut board, to_move } = game;
            if board.outcome() != GameOutcome::InProgress {
                return TestResult::discard();
            }
            let snapshot = board.clone();
            let _ = best_move(&mut board, to_move);
            TestResult::from_bool(board == snapshot)
        }
    }

    #[test]
    fn empty_board_uses_the_fixed_opening() {
        let mut board = Board::new();
        assert_eq!(best_move(&mut board, Mark::X), OPENING_MOVE);
        assert!(board.is_untouched());
    }

    #[test]
    fn completes_own_row_for_the_win() {
        // X X .
        // O O .
        // . . .
        let mut board = replay(&[0, 3, 1, 4]);
        assert_eq!(minimax(&mut board, Mark::X, Mark::X, 0), (9, Some(2)));
        assert_eq!(best_move(&mut board, Mark::X), 2);
    }

    #[test]
    fn win_score_is_discounted_by_depth() {
        // Same position, entered three plies into an enclosing search.
        let mut board = replay(&[0, 3, 1, 4]);
        let (score, cell) = minimax(&mut board, Mark::X, Mark::X, 3);
        assert_eq!(cell, Some(2));
        assert_eq!(score, 10 - 4); // The win lands at ply 4
    }

    #[test]
    fn blocks_the_opponents_threat() {
        // X X .
        // . O .
        // . . .
        // Every non-blocking reply lets X win immediately, which
        // scores -8; blocking is the unique optimum.
        let mut board = replay(&[0, 4, 1]);
        assert_eq!(best_move(&mut board, Mark::O), 2);
    }

    #[test]
    fn equal_scores_resolve_to_the_lowest_index() {
        // After X opens in the center, every corner reply draws and
        // every edge reply loses; the first corner must be picked.
        let mut board = replay(&[4]);
        let (score, cell) = minimax(&mut board, Mark::O, Mark::O, 0);
        assert_eq!(score, 0);
        assert_eq!(cell, Some(0));
        assert_eq!(best_move(&mut board, Mark::O), 0);
    }

    #[test]
    fn losing_side_prefers_the_slower_loss() {
        // X O .
        // . X .
        // . . .
        // The edge reply to a corner opening is losing. Ignoring the
        // open diagonal loses at ply 2 (score -8); blocking it holds
        // out until X completes the follow-up fork at ply 4.
        let mut board = replay(&[0, 1, 4]);
        assert_eq!(minimax(&mut board, Mark::O, Mark::O, 0), (-6, Some(8)));
    }

    #[test]
    fn self_play_from_empty_board_ties() {
        let mut board = Board::new();
        let mut to_move = Mark::X;
        while board.outcome() == GameOutcome::InProgress {
            let cell = best_move(&mut board, to_move);
            board.apply(cell, to_move).unwrap();
            to_move = to_move.opponent();
        }
        assert_eq!(board.outcome(), GameOutcome::Tie);
    }
}
