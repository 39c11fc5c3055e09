//! CorpusSource trait - corpus input abstraction
//!
//! Defines a unified interface for corpus sources, decoupling the split
//! pipeline from concrete input implementations. Supports unified handling
//! of file-backed and in-memory sources.

use crate::{Corpus, SplitError};

/// Corpus input trait
///
/// A source yields a sequence of records separated by a line terminator;
/// each record, after removing the terminator and stripping surrounding
/// whitespace, is one [`Entry`](crate::Entry). No further validation, no
/// schema. The whole corpus is read into memory before shuffling.
pub trait CorpusSource {
    /// Source name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Read the full corpus into memory.
    ///
    /// # Errors
    /// An unreadable or missing source is immediate and fatal; no retry.
    fn read(&mut self) -> Result<Corpus, SplitError>;
}
