//! # Split Engine
//!
//! Corpus partitioning core.
//!
//! Responsibilities:
//! - Produce a uniform random permutation of the corpus (Fisher-Yates contract)
//! - Cut the permutation at `floor(len * ratio)`
//! - Emit the two contiguous slices as training/testing subsets
//!
//! Single-threaded and synchronous: the uniform-permutation guarantee and the
//! size invariant both depend on one sequential shuffle-then-cut pass.

mod engine;
mod shuffler;

pub use contracts::{EntryShuffler, SplitRatio, TrainTestSplit};
pub use engine::{SplitEngine, SplitEngineConfig};
pub use shuffler::{SeededShuffler, ThreadRngShuffler};
