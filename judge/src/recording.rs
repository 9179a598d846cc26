use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use noughts::{GameOutcome, Mark};
use serde::{Deserialize, Serialize};

/// Writes one JSON file per finished game into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    moves: Vec<RecordedMove>,
}

#[derive(Serialize, Deserialize)]
pub struct RecordedMove {
    pub player: String,
    pub mark: Mark,
    pub cell: usize,
}

#[derive(Serialize, Deserialize)]
pub struct GameRecording {
    pub moves: Vec<RecordedMove>,
    pub outcome: GameOutcome,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            moves: Vec::new(),
        })
    }

    pub fn store_move(&mut self, player: &str, mark: Mark, cell: usize) {
        self.moves.push(RecordedMove {
            player: String::from(player),
            mark,
            cell,
        });
    }

    pub fn write_game_recording(&mut self, outcome: GameOutcome) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        let recording = GameRecording {
            moves: std::mem::take(&mut self.moves),
            outcome,
        };
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(())
    }
}
