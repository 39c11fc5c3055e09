//! Split run orchestration and statistics.

mod orchestrator;
mod stats;

pub use orchestrator::{SplitRun, SplitRunConfig};
pub use stats::RunStats;
