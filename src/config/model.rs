// src/config/model.rs

use serde::Deserialize;

use crate::config::validate::validate_config;
use crate::errors::BatchrunError;
use crate::types::Command;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// log_file = "command_log.txt"
/// batch_size = 4
/// strict = false
///
/// [[command]]
/// argv = ["echo", "hello"]
///
/// [[command]]
/// argv = ["sleep", "1"]
/// ```
///
/// All `[config]` keys are optional and have defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Global settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All `[[command]]` entries, in file order.
    #[serde(default, rename = "command")]
    pub commands: Vec<CommandEntry>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Path of the command log file.
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// How many commands run concurrently per batch. Must be >= 1.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// If true, a non-zero exit code fails the run instead of only being
    /// captured in the log.
    #[serde(default)]
    pub strict: bool,
}

fn default_log_file() -> String {
    "command_log.txt".to_string()
}

fn default_batch_size() -> usize {
    4
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            batch_size: default_batch_size(),
            strict: false,
        }
    }
}

/// One `[[command]]` entry: the full argv, program first.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandEntry {
    pub argv: Vec<String>,
}

/// Validated configuration used by the rest of the application.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub commands: Vec<Command>,
}

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = BatchrunError;

    fn try_from(raw: RawConfigFile) -> Result<Self, Self::Error> {
        validate_config(&raw)?;

        let commands = raw
            .commands
            .iter()
            .map(|entry| Command::new(entry.argv.clone()))
            .collect::<crate::errors::Result<Vec<_>>>()?;

        Ok(Self {
            config: raw.config,
            commands,
        })
    }
}
