// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `batchrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "batchrun",
    version,
    about = "Run external commands concurrently in fixed-size batches.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Batchrun.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Batchrun.toml")]
    pub config: String,

    /// Override `[config].batch_size` from the config file.
    #[arg(long, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Fail the run on the first non-zero exit code instead of only
    /// capturing output.
    #[arg(long)]
    pub strict: bool,

    /// Keep the existing command log instead of truncating it at startup.
    #[arg(long)]
    pub keep_log: bool,

    /// Parse + validate, print the commands, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BATCHRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
