// src/command_log/sink.rs

use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::errors::Result;

/// Handle to the command log file.
///
/// Constructed once from configuration and passed into the engine; there is
/// no process-global log path. Each write is a short open-append-close
/// transaction. Batches run strictly in sequence today, but appends still go
/// through an internal lock so that concurrent callers cannot interleave
/// partial entries.
#[derive(Debug)]
pub struct CommandLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CommandLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the log file to zero length, creating it if missing.
    pub async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        File::create(&self.path).await?;
        Ok(())
    }

    /// Append pre-formatted text blocks in the order given.
    ///
    /// Opens the file in append mode (creating it if missing), writes all
    /// blocks, and closes it again.
    pub async fn append<S: AsRef<str>>(&self, blocks: &[S]) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;

        for block in blocks {
            file.write_all(block.as_ref().as_bytes()).await?;
        }
        file.flush().await?;

        Ok(())
    }
}
