//! FileCorpusSource - line-oriented file corpus

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use contracts::{Corpus, CorpusSource, Entry, SplitError};
use metrics::counter;
use tracing::debug;

/// Corpus source backed by a newline-delimited text file.
///
/// The file is read once, fully into memory. Each line, after removing its
/// terminator and stripping surrounding whitespace, becomes one entry —
/// including lines that strip down to the empty string.
pub struct FileCorpusSource {
    name: String,
    path: PathBuf,
}

impl FileCorpusSource {
    /// Create a source for the given corpus file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            name: "file".to_string(),
            path: path.into(),
        }
    }

    /// Path this source reads from
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CorpusSource for FileCorpusSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> Result<Corpus, SplitError> {
        let file = File::open(&self.path)
            .map_err(|e| SplitError::source_read(self.path.display().to_string(), e.to_string()))?;

        let reader = BufReader::new(file);
        let mut corpus = Corpus::new();
        for line in reader.lines() {
            let line = line.map_err(|e| {
                SplitError::source_read(self.path.display().to_string(), e.to_string())
            })?;
            corpus.push(Entry::from_line(&line));
        }

        counter!("corpus_splitter_entries_read_total").increment(corpus.len() as u64);
        debug!(
            source = %self.name,
            path = %self.path.display(),
            entries = corpus.len(),
            "Corpus read"
        );

        Ok(corpus)
    }
}
