// src/config/validate.rs

use crate::config::model::RawConfigFile;
use crate::errors::{BatchrunError, Result};

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `batch_size >= 1`
/// - every `[[command]]` entry has a non-empty argv
///
/// An empty command list is allowed; a run over it simply does nothing and
/// reports completion.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_batch_size(cfg)?;
    validate_commands(cfg)?;
    Ok(())
}

fn validate_batch_size(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.batch_size == 0 {
        return Err(BatchrunError::ConfigError(
            "[config].batch_size must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_commands(cfg: &RawConfigFile) -> Result<()> {
    for (index, entry) in cfg.commands.iter().enumerate() {
        if entry.argv.is_empty() {
            return Err(BatchrunError::ConfigError(format!(
                "[[command]] entry {index} has an empty argv"
            )));
        }
    }
    Ok(())
}
