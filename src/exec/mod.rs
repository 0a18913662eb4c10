// src/exec/mod.rs

//! Process launching layer.
//!
//! This module is responsible for actually starting external processes and
//! capturing their output, using `tokio::process::Command`.
//!
//! - [`launcher`] provides the `ProcessLauncher` trait and a concrete
//!   `TokioLauncher` that the engine uses in production, and which tests can
//!   replace with a fake implementation.

pub mod launcher;

pub use launcher::{ProcessLauncher, TokioLauncher};
