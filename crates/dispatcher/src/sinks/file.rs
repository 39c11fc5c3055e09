//! LineFileSink - writes entries to disk, one per line, atomically

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use contracts::{Entry, EntrySink, SplitError};
use tempfile::NamedTempFile;
use tracing::debug;

/// Sink that writes entries to a text file, one per line.
///
/// Entries accumulate in a temp file next to the target; `close` persists it
/// over the target path in one rename, so a failure mid-write never leaves a
/// truncated or corrupt output. Any prior contents at the target are
/// overwritten on commit.
pub struct LineFileSink {
    name: String,
    path: PathBuf,
    writer: Option<BufWriter<NamedTempFile>>,
}

impl LineFileSink {
    /// Create a sink for the given target path.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    /// Returns [`SplitError::SinkWrite`] when the temp file cannot be staged
    /// (missing permissions, unwritable directory).
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self, SplitError> {
        let name = name.into();
        let path = path.into();

        // Temp file must live in the target directory so persist() is a
        // same-filesystem rename.
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| SplitError::sink_write(&name, e.to_string()))?;
        let temp =
            NamedTempFile::new_in(&dir).map_err(|e| SplitError::sink_write(&name, e.to_string()))?;

        Ok(Self {
            name,
            path,
            writer: Some(BufWriter::new(temp)),
        })
    }

    /// Target path this sink commits to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn writer(&mut self) -> Result<&mut BufWriter<NamedTempFile>, SplitError> {
        self.writer
            .as_mut()
            .ok_or_else(|| SplitError::sink_write(&self.name, "sink already closed"))
    }
}

impl EntrySink for LineFileSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&mut self, entry: &Entry) -> Result<(), SplitError> {
        let name = self.name.clone();
        let writer = self.writer()?;
        writeln!(writer, "{entry}").map_err(|e| SplitError::sink_write(name, e.to_string()))
    }

    fn flush(&mut self) -> Result<(), SplitError> {
        let name = self.name.clone();
        self.writer()?
            .flush()
            .map_err(|e| SplitError::sink_write(name, e.to_string()))
    }

    fn close(&mut self) -> Result<(), SplitError> {
        // Idempotent: a second close is a no-op
        let Some(writer) = self.writer.take() else {
            return Ok(());
        };
        let temp = writer
            .into_inner()
            .map_err(|e| SplitError::sink_write(&self.name, e.to_string()))?;
        temp.persist(&self.path)
            .map_err(|e| SplitError::sink_write(&self.name, e.to_string()))?;

        debug!(sink = %self.name, path = %self.path.display(), "Sink committed");
        Ok(())
    }
}
