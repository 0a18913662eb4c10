// src/command_log/format.rs

//! Rendering of log entries.
//!
//! The format is inherited from the tool this one replaced: argv is rendered
//! as a single-quoted list (`['echo', 'hello']`) and output buffers in bytes
//! notation (`b'hello\n'`), so existing eyeballs and greps keep working.

use chrono::{DateTime, Local};

use crate::types::{Command, CommandOutput};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Entry for a one-off command run.
pub fn single_command_entry(
    command: &Command,
    output: &CommandOutput,
    started: &DateTime<Local>,
    finished: &DateTime<Local>,
    seconds: f64,
) -> String {
    format!(
        "---SINGLE COMMAND---\n\n\
         Started: {}\n\
         Finished: {}\n\
         Took {seconds:.3} seconds\n\n\
         {}",
        started.format(TIMESTAMP_FORMAT),
        finished.format(TIMESTAMP_FORMAT),
        command_block(command, output),
    )
}

/// Header block for a whole batch; per-command blocks follow it.
pub fn batch_header(
    command_count: usize,
    started: &DateTime<Local>,
    finished: &DateTime<Local>,
    seconds: f64,
) -> String {
    format!(
        "---NEW BATCH---\n\n\
         Commands: {command_count}\n\
         Started: {}\n\
         Finished: {}\n\
         Took {seconds:.3} seconds\n\n",
        started.format(TIMESTAMP_FORMAT),
        finished.format(TIMESTAMP_FORMAT),
    )
}

/// One command/stdout/stderr group, used by both entry kinds.
pub fn command_block(command: &Command, output: &CommandOutput) -> String {
    format!(
        "command: {}\nstdout: {}\nstderr: {}\n\n",
        format_argv(command),
        format_bytes(&output.stdout),
        format_bytes(&output.stderr),
    )
}

/// Render an argv as a single-quoted list: `['echo', 'hello']`.
pub fn format_argv(command: &Command) -> String {
    let items: Vec<String> = command
        .argv()
        .iter()
        .map(|arg| format!("'{}'", escape_str(arg)))
        .collect();
    format!("[{}]", items.join(", "))
}

/// Render a byte buffer in bytes notation: `b'hello\n'`.
///
/// Printable ASCII stays literal; backslash, quote, newline, carriage return
/// and tab are escaped; everything else becomes `\xNN`.
pub fn format_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push_str("b'");
    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\x{byte:02x}")),
        }
    }
    out.push('\'');
    out
}

fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
