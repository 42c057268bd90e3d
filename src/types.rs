//! Core types and structures for wordlist-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::invalid_argument;
use crate::wordlist::{Alphabet, Combinations};

/// Emit a progress update every this many lines by default
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

/// Full runs larger than this ask for confirmation first
pub const DEFAULT_CONFIRM_THRESHOLD: u128 = 1_000_000;

/// Wordlist generation configuration
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Symbols to draw from
    pub alphabet: Alphabet,
    /// Length of every generated line
    pub length: usize,
    /// Output file path
    pub output: PathBuf,
    /// Rank of the first combination to write (for resume)
    pub start: u128,
    /// Cap on the number of lines written
    pub sample: Option<u128>,
    /// Invoke the progress callback every N lines
    pub progress_interval: u64,
    /// Window size above which a full run needs confirmation
    pub confirm_threshold: u128,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::digits(),
            length: 8,
            output: PathBuf::from("wordlist.txt"),
            start: 0,
            sample: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            confirm_threshold: DEFAULT_CONFIRM_THRESHOLD,
        }
    }
}

impl GenerationConfig {
    /// Check the configuration before any output is touched
    pub fn validate(&self) -> Result<()> {
        self.total_combinations()?;
        if self.progress_interval == 0 {
            return Err(invalid_argument!("progress interval must be at least 1"));
        }
        Ok(())
    }

    /// Size of the full enumeration, ignoring start and sample
    pub fn total_combinations(&self) -> Result<u128> {
        self.alphabet.total_combinations(self.length)
    }

    /// Number of lines a run will write if it is not interrupted
    pub fn window_size(&self) -> Result<u128> {
        let available = self.total_combinations()?.saturating_sub(self.start);
        Ok(match self.sample {
            Some(sample) => sample.min(available),
            None => available,
        })
    }

    /// Generator positioned at the configured start offset
    pub fn combinations(&self) -> Result<Combinations> {
        Combinations::starting_at(self.alphabet.clone(), self.length, self.start)
    }

    /// Bytes the window will occupy on disk, one line terminator per entry
    pub fn estimated_size(&self) -> Result<u128> {
        let line_bytes: u128 = self
            .alphabet
            .symbols()
            .iter()
            .map(|c| c.len_utf8() as u128)
            .max()
            .unwrap_or(1)
            * self.length as u128
            + 1;
        Ok(self.window_size()?.saturating_mul(line_bytes))
    }

    /// Whether a run of this size should be confirmed interactively
    pub fn needs_confirmation(&self) -> Result<bool> {
        Ok(self.sample.is_none() && self.window_size()? > self.confirm_threshold)
    }
}

/// Progress snapshot handed to the progress callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteProgress {
    /// Lines written so far
    pub current: u128,
    /// Lines the run is expected to write
    pub planned: u128,
    /// Size of the full enumeration
    pub total_combinations: u128,
}

impl WriteProgress {
    /// Progress through the planned window, in percent
    pub fn percent(&self) -> f64 {
        if self.planned == 0 {
            100.0
        } else {
            (self.current as f64 / self.planned as f64) * 100.0
        }
    }

    /// Share of the full enumeration written by this run, in percent
    pub fn percent_of_total(&self) -> f64 {
        if self.total_combinations == 0 {
            100.0
        } else {
            (self.current as f64 / self.total_combinations as f64) * 100.0
        }
    }
}

/// How a write run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Completed,
    Interrupted,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Completed => write!(f, "completed"),
            RunStatus::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// Outcome of a write run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteSummary {
    pub status: RunStatus,
    pub output: Option<PathBuf>,
    /// Lines written
    pub written: u128,
    /// Rank of the first line written
    pub start: u128,
    /// Lines the run was asked to write
    pub planned: u128,
    /// Size of the full enumeration
    pub total_combinations: u128,
    /// Bytes written, terminators included
    pub bytes_written: u64,
    pub elapsed: Duration,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl WriteSummary {
    pub fn is_complete(&self) -> bool {
        self.status == RunStatus::Completed
    }

    /// Rank to pass as start offset to continue where this run stopped
    pub fn next_start(&self) -> u128 {
        self.start + self.written
    }

    /// Lines per second over the whole run
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.written as f64 / secs
        } else {
            0.0
        }
    }
}
