// src/command_log/mod.rs

//! Append-only command log.
//!
//! Responsibilities:
//! - Own the log-file handle and serialize writes to it (`sink.rs`).
//! - Render log entries in the legacy human-readable format (`format.rs`).
//!
//! The log is for operational debugging; it is not meant to be parsed.

pub mod format;
pub mod sink;

pub use sink::CommandLog;
