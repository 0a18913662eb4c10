// src/engine/mod.rs

//! Batch execution engine.
//!
//! This module ties together:
//! - the [`Executor`], which runs one command or one concurrent batch against
//!   a `ProcessLauncher` and writes entries to the `CommandLog`
//! - the fixed-size batching loop in [`scheduler`], which slices a command
//!   list into batches, runs them strictly in sequence, and reports
//!   fractional progress
//! - the [`ProgressSink`] seam that decides where progress lines go
//!
//! Batch-to-batch execution is strictly sequential; within a batch, commands
//! run concurrently and results are restored to submission order.

pub mod executor;
pub mod progress;
pub mod scheduler;

pub use executor::Executor;
pub use progress::{ProgressSink, StdoutProgress};
