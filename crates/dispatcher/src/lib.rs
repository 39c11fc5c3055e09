//! # Dispatcher
//!
//! Output routing module.
//!
//! Responsibilities:
//! - Consume a `TrainTestSplit`
//! - Route the training subset to one sink, the testing subset to the other
//! - Commit sinks atomically (file sinks persist a temp file over the target)

pub mod dispatcher;
pub mod sinks;

pub use contracts::{EntrySink, TrainTestSplit};
pub use dispatcher::{create_file_dispatcher, create_log_dispatcher, DispatchReport, Dispatcher};
pub use sinks::{LineFileSink, LogSink};
