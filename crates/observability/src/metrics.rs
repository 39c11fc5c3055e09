//! Split-run metrics recording
//!
//! Thin wrappers over the `metrics` facade; a recorder is only installed when
//! an embedding process wants one, otherwise these are no-ops.

use contracts::TrainTestSplit;
use metrics::{counter, gauge};

/// Record a completed corpus read
pub fn record_corpus_read(entries: usize) {
    counter!("corpus_splitter_reads_total").increment(1);
    gauge!("corpus_splitter_corpus_entries").set(entries as f64);
}

/// Record the outcome of one partition run
pub fn record_split_outcome(split: &TrainTestSplit) {
    gauge!("corpus_splitter_training_entries").set(split.training.len() as f64);
    gauge!("corpus_splitter_testing_entries").set(split.testing.len() as f64);

    let total = split.total_len();
    if total > 0 {
        gauge!("corpus_splitter_achieved_ratio")
            .set(split.training.len() as f64 / total as f64);
    }
}
