//! SplitEngine - shuffle-then-cut partitioner

use contracts::{Corpus, EntryShuffler, SplitRatio, TrainTestSplit};
use metrics::counter;
use tracing::debug;

use crate::shuffler::{SeededShuffler, ThreadRngShuffler};

/// Engine construction parameters
#[derive(Debug, Clone, Copy)]
pub struct SplitEngineConfig {
    /// Training fraction
    pub ratio: SplitRatio,
    /// Fixed shuffle seed; `None` selects the thread RNG
    pub seed: Option<u64>,
}

/// The Partitioner: one corpus in, two disjoint subsets out.
///
/// Pure over its inputs — no retries, no partial-failure semantics. The I/O
/// boundary (sources and sinks) lives in the ingestion and dispatcher crates.
pub struct SplitEngine {
    ratio: SplitRatio,
    shuffler: Box<dyn EntryShuffler>,
}

impl SplitEngine {
    /// Build an engine from configuration, selecting the shuffler by seed
    pub fn new(config: SplitEngineConfig) -> Self {
        let shuffler: Box<dyn EntryShuffler> = match config.seed {
            Some(seed) => Box::new(SeededShuffler::new(seed)),
            None => Box::new(ThreadRngShuffler::new()),
        };
        Self {
            ratio: config.ratio,
            shuffler,
        }
    }

    /// Build an engine around an injected shuffler
    pub fn with_shuffler(ratio: SplitRatio, shuffler: Box<dyn EntryShuffler>) -> Self {
        Self { ratio, shuffler }
    }

    /// The configured training fraction
    pub fn ratio(&self) -> SplitRatio {
        self.ratio
    }

    /// Partition a corpus into training and testing subsets.
    ///
    /// Shuffles the corpus uniformly, then cuts at `floor(len * ratio)`:
    /// training takes the permutation's prefix, testing the remainder. Both
    /// subsets keep the shuffled internal order. An empty corpus yields two
    /// empty subsets; that is not an error.
    pub fn partition(&mut self, corpus: Corpus) -> TrainTestSplit {
        let mut entries = corpus.into_entries();
        self.shuffler.shuffle(&mut entries);

        let boundary = self.ratio.boundary(entries.len());
        let testing = entries.split_off(boundary);

        counter!("corpus_splitter_partitions_total").increment(1);
        debug!(
            shuffler = %self.shuffler.name(),
            ratio = self.ratio.value(),
            training = entries.len(),
            testing = testing.len(),
            "Corpus partitioned"
        );

        TrainTestSplit {
            training: entries,
            testing,
        }
    }
}
