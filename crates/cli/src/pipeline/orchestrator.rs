//! SplitRun - wires source, engine and sinks for one partition run.

use std::time::Instant;

use contracts::{CorpusSource, SplitError, SplitPlan};
use dispatcher::{create_file_dispatcher, create_log_dispatcher};
use ingestion::FileCorpusSource;
use split_engine::{SplitEngine, SplitEngineConfig};
use tracing::info;

use super::stats::RunStats;

/// Orchestration parameters for one run
#[derive(Debug, Clone)]
pub struct SplitRunConfig {
    /// The loaded, validated plan
    pub plan: SplitPlan,
    /// Route subsets to log sinks instead of files
    pub dry_run: bool,
}

/// One read-shuffle-cut-dispatch pass over the corpus.
pub struct SplitRun {
    config: SplitRunConfig,
}

impl SplitRun {
    /// Create a run from configuration
    pub fn new(config: SplitRunConfig) -> Self {
        Self { config }
    }

    /// Execute the run.
    ///
    /// # Errors
    /// Propagates the first source, engine or sink error; there is no retry
    /// and no partial-output cleanup beyond the sinks' atomic commit.
    pub fn run(self) -> Result<RunStats, SplitError> {
        let started = Instant::now();
        let plan = &self.config.plan;

        let ratio = plan.ratio()?;

        let mut source = FileCorpusSource::new(&plan.source.path);
        let corpus = source.read()?;
        let entries_read = corpus.len();
        observability::record_corpus_read(entries_read);

        let mut engine = SplitEngine::new(SplitEngineConfig {
            ratio,
            seed: plan.split.seed,
        });
        let split = engine.partition(corpus);
        observability::record_split_outcome(&split);

        let dispatcher = if self.config.dry_run {
            info!("Dry run - subsets routed to log sinks");
            create_log_dispatcher()
        } else {
            create_file_dispatcher(plan)?
        };
        let report = dispatcher.dispatch(&split)?;

        Ok(RunStats {
            entries_read,
            training_written: report.training_written,
            testing_written: report.testing_written,
            requested_ratio: ratio.value(),
            dry_run: self.config.dry_run,
            duration: started.elapsed(),
        })
    }
}
