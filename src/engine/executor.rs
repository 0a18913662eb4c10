// src/engine/executor.rs

//! The `Executor`: runs single commands and whole batches.

use std::time::{Duration, Instant};

use chrono::Local;
use futures::future;
use tracing::{debug, info};

use crate::command_log::{CommandLog, format};
use crate::errors::{BatchrunError, Result};
use crate::exec::ProcessLauncher;
use crate::types::{Command, CommandOutput};

/// Runs commands through a [`ProcessLauncher`] and records every run in the
/// [`CommandLog`].
///
/// Holds all run policy: the launcher, the log sink, and whether non-zero
/// exit codes are errors (`strict`). Constructed once at startup and shared
/// by reference; it keeps no per-run mutable state.
pub struct Executor<L: ProcessLauncher> {
    launcher: L,
    log: CommandLog,
    strict: bool,
}

impl<L: ProcessLauncher> Executor<L> {
    pub fn new(launcher: L, log: CommandLog) -> Self {
        Self {
            launcher,
            log,
            strict: false,
        }
    }

    /// Enable or disable strict exit-code handling.
    ///
    /// Off by default: captured output is returned regardless of exit code.
    /// When on, a non-zero (or signalled) exit surfaces as
    /// [`BatchrunError::CommandFailed`] after the log entry is written.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    /// Run one command, write a single-command log entry, and return its
    /// decoded stdout.
    pub async fn run_single(&self, command: &Command) -> Result<String> {
        let started = Local::now();
        let timer = Instant::now();

        let output = self.launcher.launch(command).await?;

        let finished = Local::now();
        let seconds = round_seconds(timer.elapsed());

        let entry =
            format::single_command_entry(command, &output, &started, &finished, seconds);
        self.log.append(&[entry]).await?;

        info!(command = %command.program(), seconds, "single command finished");

        self.check_strict(command, &output)?;
        decode_stdout(command, output)
    }

    /// Run one batch of commands concurrently and return their decoded
    /// stdouts in submission order.
    ///
    /// All launches are started together and joined; the batch is done only
    /// when every command has exited, so one slow command delays the whole
    /// batch. The first launch failure aborts the join: remaining futures
    /// are dropped and their children killed (`kill_on_drop` in the
    /// launcher).
    pub(crate) async fn run_batch(&self, batch: &[Command]) -> Result<Vec<String>> {
        debug!(commands = batch.len(), "starting batch");

        let started = Local::now();
        let timer = Instant::now();

        let launches = batch.iter().map(|command| self.launcher.launch(command));
        let outputs = future::try_join_all(launches).await?;

        let finished = Local::now();
        let seconds = round_seconds(timer.elapsed());

        // One append for the whole batch: header first, then one block per
        // command in submission order.
        let mut blocks = Vec::with_capacity(batch.len() + 1);
        blocks.push(format::batch_header(batch.len(), &started, &finished, seconds));
        for (command, output) in batch.iter().zip(&outputs) {
            blocks.push(format::command_block(command, output));
        }
        self.log.append(&blocks).await?;

        info!(commands = batch.len(), seconds, "batch finished");

        let mut results = Vec::with_capacity(batch.len());
        for (command, output) in batch.iter().zip(outputs) {
            self.check_strict(command, &output)?;
            results.push(decode_stdout(command, output)?);
        }
        Ok(results)
    }

    fn check_strict(&self, command: &Command, output: &CommandOutput) -> Result<()> {
        if self.strict && !output.success() {
            return Err(BatchrunError::CommandFailed {
                command: command.program().to_string(),
                code: output.exit_code.unwrap_or(-1),
            });
        }
        Ok(())
    }
}

/// Elapsed wall-clock seconds at 3-decimal precision.
fn round_seconds(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0).round() / 1000.0
}

fn decode_stdout(command: &Command, output: CommandOutput) -> Result<String> {
    String::from_utf8(output.stdout).map_err(|source| BatchrunError::StdoutDecode {
        command: command.program().to_string(),
        source,
    })
}
