//! Sink implementations
//!
//! Contains LineFileSink and LogSink.

mod file;
mod log;

pub use self::file::LineFileSink;
pub use self::log::LogSink;
