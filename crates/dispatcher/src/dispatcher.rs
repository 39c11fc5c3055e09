//! Dispatcher - routes a TrainTestSplit to its two sinks

use contracts::{Entry, EntrySink, SplitError, SplitPlan, TrainTestSplit};
use metrics::counter;
use tracing::info;

use crate::sinks::{LineFileSink, LogSink};

/// Per-sink write counts from one dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Entries written to the training sink
    pub training_written: usize,
    /// Entries written to the testing sink
    pub testing_written: usize,
}

/// Routes the two subsets of a split to their sinks.
///
/// The two output files of one run succeed or fail together from the
/// caller's point of view: any sink error aborts the dispatch and propagates.
pub struct Dispatcher {
    training: Box<dyn EntrySink>,
    testing: Box<dyn EntrySink>,
}

impl Dispatcher {
    /// Create a dispatcher over explicit sinks
    pub fn new(training: Box<dyn EntrySink>, testing: Box<dyn EntrySink>) -> Self {
        Self { training, testing }
    }

    /// Write every entry of each subset to its sink, then commit both.
    ///
    /// # Errors
    /// Returns the first sink error; no retry, no partial recovery.
    pub fn dispatch(mut self, split: &TrainTestSplit) -> Result<DispatchReport, SplitError> {
        let training_written = Self::drain(self.training.as_mut(), &split.training)?;
        let testing_written = Self::drain(self.testing.as_mut(), &split.testing)?;

        info!(
            training = training_written,
            testing = testing_written,
            "Split dispatched"
        );

        Ok(DispatchReport {
            training_written,
            testing_written,
        })
    }

    fn drain(sink: &mut dyn EntrySink, entries: &[Entry]) -> Result<usize, SplitError> {
        for entry in entries {
            sink.write(entry)?;
        }
        sink.flush()?;
        sink.close()?;

        counter!("corpus_splitter_entries_written_total", "sink" => sink.name().to_string())
            .increment(entries.len() as u64);
        Ok(entries.len())
    }
}

/// Build a dispatcher over the plan's two output files
pub fn create_file_dispatcher(plan: &SplitPlan) -> Result<Dispatcher, SplitError> {
    let training = LineFileSink::new("training", &plan.outputs.training)?;
    let testing = LineFileSink::new("testing", &plan.outputs.testing)?;
    Ok(Dispatcher::new(Box::new(training), Box::new(testing)))
}

/// Build a dry-run dispatcher that logs instead of writing files
pub fn create_log_dispatcher() -> Dispatcher {
    Dispatcher::new(
        Box::new(LogSink::new("training")),
        Box::new(LogSink::new("testing")),
    )
}
