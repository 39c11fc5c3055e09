//! # Ingestion
//!
//! Corpus ingestion module.
//!
//! Responsibilities:
//! - Read newline-delimited corpus sources fully into memory
//! - Strip each record into an `Entry` (no further validation, no schema)
//! - Surface unreadable sources immediately as fatal errors
//!
//! ## Usage Example (Unified Interface)
//!
//! ```ignore
//! use contracts::CorpusSource;
//! use ingestion::FileCorpusSource;
//!
//! let mut source = FileCorpusSource::new("words.txt");
//! let corpus = source.read()?;
//! ```
//!
//! ## In-memory Testing
//!
//! ```ignore
//! use ingestion::MemoryCorpusSource;
//!
//! let mut source = MemoryCorpusSource::new(["alpha", "beta"]);
//! let corpus = source.read().unwrap();
//! ```

mod file_source;
mod memory;

// Re-exports
pub use contracts::{Corpus, CorpusSource, Entry};
pub use file_source::FileCorpusSource;
pub use memory::MemoryCorpusSource;
