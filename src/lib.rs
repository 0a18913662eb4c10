// src/lib.rs

pub mod cli;
pub mod command_log;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;

use anyhow::Result;
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::command_log::CommandLog;
use crate::command_log::format::format_argv;
use crate::config::ConfigFile;
use crate::config::loader::load_and_validate;
use crate::engine::Executor;
use crate::errors::BatchrunError;
use crate::exec::TokioLauncher;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the command log (cleared at startup unless `--keep-log`)
/// - the launcher / executor
/// - the batched run with progress on stdout
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.config)?;

    let batch_size = args.batch_size.unwrap_or(cfg.config.batch_size);
    if batch_size == 0 {
        return Err(
            BatchrunError::ConfigError("--batch-size must be >= 1 (got 0)".to_string()).into(),
        );
    }
    let strict = args.strict || cfg.config.strict;

    if args.dry_run {
        print_dry_run(&cfg, batch_size, strict);
        return Ok(());
    }

    if cfg.commands.is_empty() {
        warn!("no [[command]] entries in config; nothing to run");
    }

    let log = CommandLog::new(&cfg.config.log_file);
    if !args.keep_log {
        log.clear().await?;
    }

    info!(
        log_file = %cfg.config.log_file,
        batch_size,
        strict,
        commands = cfg.commands.len(),
        "starting batched run"
    );

    let executor = Executor::new(TokioLauncher::new(), log).with_strict(strict);
    let results = executor.run_batched(&cfg.commands, batch_size).await?;

    info!(results = results.len(), "all batches finished");
    Ok(())
}

/// Simple dry-run output: print settings and commands.
fn print_dry_run(cfg: &ConfigFile, batch_size: usize, strict: bool) {
    println!("batchrun dry-run");
    println!("  config.log_file = {}", cfg.config.log_file);
    println!("  batch_size = {batch_size}");
    println!("  strict = {strict}");
    println!();

    println!("commands ({}):", cfg.commands.len());
    for command in cfg.commands.iter() {
        println!("  - {}", format_argv(command));
    }
}
