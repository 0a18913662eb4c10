#![allow(dead_code)]

use batchrun::config::{CommandEntry, ConfigFile, ConfigSection, RawConfigFile};
use batchrun::types::Command;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                commands: Vec::new(),
            },
        }
    }

    pub fn with_log_file(mut self, path: &str) -> Self {
        self.config.config.log_file = path.to_string();
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.config.config.batch_size = batch_size;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.config.config.strict = strict;
        self
    }

    pub fn with_command<I, S>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.commands.push(CommandEntry {
            argv: argv.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build `count` distinct commands named `cmd0`, `cmd1`, ...
///
/// Paired with `FakeLauncher`'s default behaviour (stdout = program name),
/// this lets tests match results back to submission order.
pub fn numbered_commands(count: usize) -> Vec<Command> {
    (0..count)
        .map(|i| Command::new([format!("cmd{i}")]).expect("non-empty argv"))
        .collect()
}
