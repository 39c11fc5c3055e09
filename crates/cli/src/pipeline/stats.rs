//! Run statistics.

use std::time::Duration;

/// Statistics from one split run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Entries read from the source corpus
    pub entries_read: usize,

    /// Entries written to the training sink
    pub training_written: usize,

    /// Entries written to the testing sink
    pub testing_written: usize,

    /// Training fraction the plan asked for
    pub requested_ratio: f64,

    /// Whether the run routed to log sinks
    pub dry_run: bool,

    /// Total duration of the run
    pub duration: Duration,
}

impl RunStats {
    /// Fraction of the corpus that actually landed in training
    pub fn achieved_ratio(&self) -> f64 {
        let total = self.training_written + self.testing_written;
        if total > 0 {
            self.training_written as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Print detailed summary
    pub fn print_summary(&self) {
        println!("\nSplit Statistics");
        println!("   ├─ Duration: {:.3}s", self.duration.as_secs_f64());
        println!("   ├─ Entries read: {}", self.entries_read);
        println!("   ├─ Training written: {}", self.training_written);
        println!("   ├─ Testing written: {}", self.testing_written);
        println!(
            "   ├─ Ratio: {:.3} requested / {:.3} achieved",
            self.requested_ratio,
            self.achieved_ratio()
        );
        println!("   └─ Mode: {}", if self.dry_run { "dry run" } else { "files" });
    }
}
