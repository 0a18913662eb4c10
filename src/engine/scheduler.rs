// src/engine/scheduler.rs

//! Fixed-size batching loop on top of the [`Executor`].

use tracing::debug;

use crate::engine::executor::Executor;
use crate::engine::progress::{ProgressSink, StdoutProgress};
use crate::errors::{BatchrunError, Result};
use crate::exec::ProcessLauncher;
use crate::types::Command;

impl<L: ProcessLauncher> Executor<L> {
    /// Run `commands` in batches of at most `batch_size`, printing progress
    /// to stdout.
    ///
    /// Batches execute strictly in sequence: batch N+1 never starts before
    /// every command in batch N has completed. The returned stdouts preserve
    /// global submission order regardless of batch boundaries.
    pub async fn run_batched(
        &self,
        commands: &[Command],
        batch_size: usize,
    ) -> Result<Vec<String>> {
        self.run_batched_with(commands, batch_size, &mut StdoutProgress)
            .await
    }

    /// Like [`Executor::run_batched`], but with an explicit progress sink.
    pub async fn run_batched_with(
        &self,
        commands: &[Command],
        batch_size: usize,
        progress: &mut (dyn ProgressSink + Send),
    ) -> Result<Vec<String>> {
        if batch_size == 0 {
            return Err(BatchrunError::ConfigError(
                "batch_size must be >= 1 (got 0)".to_string(),
            ));
        }

        let total_batches = commands.len().div_ceil(batch_size);
        debug!(
            commands = commands.len(),
            batch_size, total_batches, "starting batched run"
        );

        let mut results = Vec::with_capacity(commands.len());
        for (batch_num, batch) in commands.chunks(batch_size).enumerate() {
            results.extend(self.run_batch(batch).await?);

            if batch_num + 1 < total_batches {
                progress.percent(percent_complete(batch_num + 1, total_batches));
            }
        }

        progress.done();
        Ok(results)
    }
}

/// Whole-number percentage of completed batches.
fn percent_complete(completed: usize, total: usize) -> u8 {
    ((completed as f64 / total as f64) * 100.0).round() as u8
}
