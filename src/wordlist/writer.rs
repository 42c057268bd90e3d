//! Wordlist writer - stream a window of the enumeration into a file

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crate::error::{Result, WordlistError};
use crate::types::{GenerationConfig, RunStatus, WriteProgress, WriteSummary};

/// Shared cancellation flag, checked by the writer between lines
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the running write loop to stop after the current line
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Writes one combination per line for the configured start/sample window
pub struct WordlistWriter {
    config: GenerationConfig,
    cancel: CancelToken,
}

impl WordlistWriter {
    /// Create a new writer, validating the configuration up front
    pub fn new(config: GenerationConfig) -> Result<Self> {
        Self::with_cancel_token(config, CancelToken::new())
    }

    /// Create a writer that stops when `cancel` is triggered
    pub fn with_cancel_token(config: GenerationConfig, cancel: CancelToken) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, cancel })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Handle that can interrupt this writer from elsewhere (e.g. a signal handler)
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Create the configured output file and write the window into it.
    ///
    /// The file is truncated first. Lines already written stay on disk if the
    /// run fails or is interrupted.
    pub fn run<F>(&self, on_progress: F) -> Result<WriteSummary>
    where
        F: FnMut(&WriteProgress),
    {
        let path = self.config.output.as_path();
        let file = File::create(path).map_err(|e| WordlistError::io(&e, Some(path)))?;

        let mut summary = self.write_with(BufWriter::new(file), Some(path), on_progress)?;
        summary.output = Some(path.to_path_buf());
        Ok(summary)
    }

    /// Write the window into an arbitrary sink
    pub fn write_to<W, F>(&self, sink: W, on_progress: F) -> Result<WriteSummary>
    where
        W: Write,
        F: FnMut(&WriteProgress),
    {
        self.write_with(sink, None, on_progress)
    }

    fn write_with<W, F>(
        &self,
        mut sink: W,
        path: Option<&Path>,
        mut on_progress: F,
    ) -> Result<WriteSummary>
    where
        W: Write,
        F: FnMut(&WriteProgress),
    {
        let started_at = Utc::now();
        let start_time = Instant::now();

        let total_combinations = self.config.total_combinations()?;
        let planned = self.config.window_size()?;
        let interval = u128::from(self.config.progress_interval);
        let mut combinations = self.config.combinations()?;

        if planned == 0 {
            tracing::warn!(
                start = %self.config.start,
                total = %total_combinations,
                "Start offset is past the end of the enumeration, nothing to write"
            );
        }
        tracing::info!(
            length = self.config.length,
            start = %self.config.start,
            planned = %planned,
            "Starting wordlist generation"
        );

        let mut written: u128 = 0;
        let mut bytes_written: u64 = 0;
        let mut status = RunStatus::Completed;

        while written < planned {
            if self.cancel.is_cancelled() {
                status = RunStatus::Interrupted;
                break;
            }

            let Some(combination) = combinations.next() else {
                break;
            };

            sink.write_all(combination.as_bytes())
                .and_then(|_| sink.write_all(b"\n"))
                .map_err(|e| WordlistError::io(&e, path))?;

            written += 1;
            bytes_written += combination.len() as u64 + 1;

            if written % interval == 0 {
                on_progress(&WriteProgress {
                    current: written,
                    planned,
                    total_combinations,
                });
            }
        }

        sink.flush().map_err(|e| WordlistError::io(&e, path))?;

        let elapsed = start_time.elapsed();
        match status {
            RunStatus::Completed => tracing::info!(
                written = %written,
                elapsed_ms = elapsed.as_millis() as u64,
                "Wordlist generation completed"
            ),
            RunStatus::Interrupted => tracing::warn!(
                written = %written,
                next_start = %(self.config.start + written),
                "Wordlist generation interrupted"
            ),
        }

        Ok(WriteSummary {
            status,
            output: None,
            written,
            start: self.config.start,
            planned,
            total_combinations,
            bytes_written,
            elapsed,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
