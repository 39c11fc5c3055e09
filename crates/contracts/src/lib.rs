//! # Contracts
//!
//! Frozen interface contracts (ICD), defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Data Model
//! - `Entry` is one whitespace-stripped line of the source corpus
//! - `SplitRatio` is the training fraction, strictly inside (0, 1)
//! - The boundary index is always `floor(len * ratio)`, never rounded

mod entry;
mod error;
mod plan;
mod shuffler;
mod sink;
mod source;
mod split;

pub use entry::{Corpus, Entry};
pub use error::*;
pub use plan::*;
pub use shuffler::EntryShuffler;
pub use sink::EntrySink;
pub use source::CorpusSource;
pub use split::{SplitRatio, TrainTestSplit};
