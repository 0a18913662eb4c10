// src/engine/progress.rs

//! Progress reporting seam for batched runs.

/// Where fractional progress of a batched run is reported.
///
/// Production code uses [`StdoutProgress`]; tests can record the calls
/// instead of printing.
pub trait ProgressSink {
    /// Called after each completed non-final batch with the rounded
    /// whole-number percentage of batches done.
    fn percent(&mut self, percent: u8);

    /// Called exactly once, after the final batch (or immediately for an
    /// empty command list).
    fn done(&mut self);
}

/// Prints plain progress lines to stdout.
///
/// Stdout is reserved for these lines; diagnostics go to stderr via
/// `tracing`.
pub struct StdoutProgress;

impl ProgressSink for StdoutProgress {
    fn percent(&mut self, percent: u8) {
        println!("   {percent}% complete...");
    }

    fn done(&mut self) {
        println!("   done");
    }
}
