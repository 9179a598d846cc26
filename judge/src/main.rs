use std::path::PathBuf;

use clap::Parser;
use judge::{play_game, GameResult, Player, PlayerKind, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// The first player
    #[arg(value_enum)]
    player_1: PlayerKind,

    /// The second player
    #[arg(value_enum)]
    player_2: PlayerKind,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record each game's moves as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    wins: [usize; 2],
    ties: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = match args.record_games_to_directory {
        Some(dir_path) => Some(Recorder::new(dir_path)?),
        None => None,
    };

    let mut players = [Player::new(args.player_1), Player::new(args.player_2)];
    if args.player_1 == args.player_2 {
        players[0].name.push_str("-1");
        players[1].name.push_str("-2");
    }
    let player_names = [players[0].name.clone(), players[1].name.clone()];

    let mut match_score = MatchScore::default();
    for game_idx in 0..args.num_games {
        match play_game(&mut rng, &mut players, &mut recorder)? {
            GameResult::WonByPlayer { player_idx } => {
                debug!(winner = %player_names[player_idx], game_idx);
                match_score.wins[player_idx] += 1;
            }
            GameResult::Tie => {
                debug!(game_idx, "Tie");
                match_score.ties += 1;
            }
        }
    }

    eprintln!(
        "End result:\n- {} wins by {}\n- {} wins by {}\n- {} ties",
        match_score.wins[0],
        player_names[0],
        match_score.wins[1],
        player_names[1],
        match_score.ties
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
