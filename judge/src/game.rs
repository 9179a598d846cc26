use noughts::{visualize_board, Board, GameOutcome, Mark};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::player::Player;
use crate::recording::Recorder;

pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Tie,
}

/// Plays a single game between the two players and reports who won.
///
/// Marks are assigned randomly, so over a match neither player is
/// systematically the first mover. Every chosen cell goes through the
/// validating [`Board::apply`]; since both players are in-process and
/// only ever pick empty cells, a rejected move is a bug and surfaces
/// as an error rather than a forfeit.
pub fn play_game(
    rng: &mut StdRng,
    players: &mut [Player; 2],
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    // Assign one player X and the other O randomly
    let marks = {
        let mut arr = [Mark::X, Mark::O];
        arr.shuffle(rng);
        arr
    };

    let mut board = Board::new();
    let mut to_move = Mark::X;
    let outcome = loop {
        match board.outcome() {
            GameOutcome::InProgress => {}
            decided => break decided,
        }
        let player_idx = if marks[0] == to_move { 0 } else { 1 };
        let cell = players[player_idx].choose_move(rng, &mut board, to_move);
        board.apply(cell, to_move)?;
        debug!(player = %players[player_idx].name, mark = %to_move, cell);
        if let Some(rec) = recorder {
            rec.store_move(&players[player_idx].name, to_move, cell);
        }
        to_move = to_move.opponent();
    };
    debug!("Final position:\n{}", visualize_board(&board));

    if let Some(rec) = recorder {
        rec.write_game_recording(outcome)?;
    }

    Ok(match outcome {
        GameOutcome::Win(mark) => {
            let player_idx = if marks[0] == mark { 0 } else { 1 };
            GameResult::WonByPlayer { player_idx }
        }
        GameOutcome::Tie => GameResult::Tie,
        GameOutcome::InProgress => unreachable!("the loop only breaks on decided outcomes"),
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::player::PlayerKind;

    #[test]
    fn perfect_self_play_always_ties() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut players = [
            Player::new(PlayerKind::Perfect),
            Player::new(PlayerKind::Perfect),
        ];
        for _ in 0..4 {
            let result = play_game(&mut rng, &mut players, &mut None).unwrap();
            assert!(matches!(result, GameResult::Tie));
        }
    }

    #[test]
    fn perfect_never_loses_to_random() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut players = [
            Player::new(PlayerKind::Perfect),
            Player::new(PlayerKind::Random),
        ];
        for _ in 0..50 {
            match play_game(&mut rng, &mut players, &mut None).unwrap() {
                GameResult::WonByPlayer { player_idx } => assert_eq!(player_idx, 0),
                GameResult::Tie => {}
            }
        }
    }
}
