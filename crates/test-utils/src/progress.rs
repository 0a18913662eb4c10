use batchrun::engine::ProgressSink;

/// Records progress calls instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub percents: Vec<u8>,
    pub done_calls: usize,
}

impl ProgressSink for RecordingProgress {
    fn percent(&mut self, percent: u8) {
        self.percents.push(percent);
    }

    fn done(&mut self) {
        self.done_calls += 1;
    }
}
