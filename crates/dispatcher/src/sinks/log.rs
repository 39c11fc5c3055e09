//! LogSink - logs entries via tracing instead of writing files

use contracts::{Entry, EntrySink, SplitError};
use tracing::{info, trace};

/// Sink that logs entries for dry runs and debugging.
///
/// Nothing touches the filesystem; `close` emits a count summary.
pub struct LogSink {
    name: String,
    written: usize,
}

impl LogSink {
    /// Create a new LogSink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            written: 0,
        }
    }

    /// Entries received so far
    pub fn written(&self) -> usize {
        self.written
    }
}

impl EntrySink for LogSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&mut self, entry: &Entry) -> Result<(), SplitError> {
        self.written += 1;
        trace!(sink = %self.name, entry = %entry, "Entry received");
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SplitError> {
        // Nothing to flush for log sink
        Ok(())
    }

    fn close(&mut self) -> Result<(), SplitError> {
        info!(sink = %self.name, entries = self.written, "LogSink closed");
        Ok(())
    }
}
