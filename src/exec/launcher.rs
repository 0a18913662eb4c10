// src/exec/launcher.rs

//! Pluggable process-launcher abstraction.
//!
//! The engine talks to a `ProcessLauncher` instead of `tokio::process`
//! directly. This makes it easy to swap in a fake launcher in tests while
//! keeping the production implementation here.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command as OsCommand;
use tracing::debug;

use crate::errors::{BatchrunError, Result};
use crate::types::{Command, CommandOutput};

/// Trait abstracting how one external command is started and awaited.
///
/// Production code uses [`TokioLauncher`]; tests can provide their own
/// implementation that doesn't spawn real processes. Many launches may be in
/// flight at once; implementations share no mutable state between them.
pub trait ProcessLauncher: Send + Sync {
    /// Start the process with no stdin, capture complete stdout and stderr,
    /// and resolve once it has exited.
    ///
    /// The captured buffers are returned regardless of exit code. Failure to
    /// start at all (missing executable, permission denied, OS spawn error)
    /// surfaces as [`BatchrunError::LaunchError`].
    fn launch<'a>(
        &'a self,
        command: &'a Command,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + 'a>>;
}

/// Real launcher used in production.
pub struct TokioLauncher;

impl TokioLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher for TokioLauncher {
    fn launch<'a>(
        &'a self,
        command: &'a Command,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + 'a>> {
        Box::pin(async move {
            debug!(command = %command.program(), "spawning process");

            // kill_on_drop: a batch abandoned mid-wait (sibling launch
            // failure) must not leave this child running untracked.
            let child = OsCommand::new(command.program())
                .args(command.args())
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .spawn()
                .map_err(|source| BatchrunError::LaunchError {
                    command: command.program().to_string(),
                    source,
                })?;

            let output = child.wait_with_output().await?;

            debug!(
                command = %command.program(),
                exit_code = output.status.code().unwrap_or(-1),
                success = output.status.success(),
                "process exited"
            );

            Ok(CommandOutput {
                stdout: output.stdout,
                stderr: output.stderr,
                exit_code: output.status.code(),
            })
        })
    }
}
