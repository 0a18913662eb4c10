// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchrunError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to launch {command}: {source}")]
    LaunchError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Strict mode only: the process exited with a non-zero code (or was
    /// killed by a signal, reported as code -1).
    #[error("Command {command} exited with code {code}")]
    CommandFailed { command: String, code: i32 },

    #[error("stdout of {command} is not valid UTF-8: {source}")]
    StdoutDecode {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, BatchrunError>;
