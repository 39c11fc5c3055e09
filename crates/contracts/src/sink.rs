//! EntrySink trait - Dispatcher output interface
//!
//! Defines the abstract interface for sinks.

use crate::{Entry, SplitError};

/// Entry output trait
///
/// All sink implementations must implement this trait. Entries are written
/// one per line in sequence order; `close` commits the sink, after which
/// further writes fail.
pub trait EntrySink {
    /// Sink name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Write one entry, terminated by a single line terminator
    ///
    /// # Errors
    /// Returns write error (should include context)
    fn write(&mut self, entry: &Entry) -> Result<(), SplitError>;

    /// Flush buffer (if any)
    fn flush(&mut self) -> Result<(), SplitError>;

    /// Close sink, committing its contents
    fn close(&mut self) -> Result<(), SplitError>;
}
