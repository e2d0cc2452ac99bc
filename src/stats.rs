//! Completed-game statistics
//!
//! The engine only reports that a game finished; storing the count is up to the
//! [`GameRecorder`] handed to each game.

use anyhow::Result;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::warn;

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

pub const STATS_PATH: &str = "xo_statistics.bin";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: u64,
    /// When the last game finished, in milliseconds since the Unix epoch
    pub last_game: Option<u64>,
}

impl Statistics {
    pub fn record(&mut self, finished_at: u64) {
        self.games_played += 1;
        self.last_game = Some(finished_at);
    }
}

/// Receives one call per game that reached a win or a draw
pub trait GameRecorder: Send {
    fn record_completed_game(&mut self) -> Result<()>;
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Keeps statistics in memory; clones share the same counter
#[derive(Clone, Debug, Default)]
pub struct MemoryRecorder(Arc<Mutex<Statistics>>);

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statistics(&self) -> Statistics {
        *self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl GameRecorder for MemoryRecorder {
    fn record_completed_game(&mut self) -> Result<()> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .record(now_millis());
        Ok(())
    }
}

/// Statistics stored in a small binary file
///
/// The file holds two big-endian `u64`s: the number of games played and the finish time of the
/// last one (0 if there was none). A missing or truncated file reads as empty statistics and is
/// overwritten by the next recorded game.
#[derive(Clone, Debug)]
pub struct StatsFile {
    path: PathBuf,
}

impl StatsFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Statistics> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Statistics::default()),
            Err(err) => return Err(err.into()),
        };
        match read_statistics(BufReader::new(file)) {
            Ok(statistics) => Ok(statistics),
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
                warn!(
                    "statistics file {} is truncated, starting from empty statistics",
                    self.path.display()
                );
                Ok(Statistics::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, statistics: &Statistics) -> Result<()> {
        let mut file = BufWriter::new(
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)?,
        );
        file.write_u64::<BigEndian>(statistics.games_played)?;
        file.write_u64::<BigEndian>(statistics.last_game.unwrap_or(0))?;
        file.flush()?;
        Ok(())
    }
}

fn read_statistics<R: Read>(mut reader: R) -> io::Result<Statistics> {
    let games_played = reader.read_u64::<BigEndian>()?;
    let last_game = match reader.read_u64::<BigEndian>()? {
        0 => None,
        timestamp => Some(timestamp),
    };
    Ok(Statistics {
        games_played,
        last_game,
    })
}

impl GameRecorder for StatsFile {
    fn record_completed_game(&mut self) -> Result<()> {
        let mut statistics = self.load()?;
        statistics.record(now_millis());
        self.save(&statistics)
    }
}
