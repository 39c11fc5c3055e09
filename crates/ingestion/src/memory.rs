//! MemoryCorpusSource - in-memory corpus for tests and fixtures

use contracts::{Corpus, CorpusSource, Entry, SplitError};

/// Corpus source over an in-memory record list.
///
/// Behaves exactly like a file source (records are stripped the same way),
/// without touching the filesystem. Used by tests and fixtures.
pub struct MemoryCorpusSource {
    name: String,
    records: Vec<String>,
}

impl MemoryCorpusSource {
    /// Create a source from raw record lines
    pub fn new<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: "memory".to_string(),
            records: records.into_iter().map(Into::into).collect(),
        }
    }
}

impl CorpusSource for MemoryCorpusSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> Result<Corpus, SplitError> {
        Ok(self
            .records
            .iter()
            .map(|line| Entry::from_line(line))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_mirrors_file_semantics() {
        let mut source = MemoryCorpusSource::new(["  alpha ", "beta", "   "]);
        let corpus = source.read().unwrap();
        assert_eq!(corpus.len(), 3);
        let entries = corpus.into_entries();
        assert_eq!(entries[0].as_str(), "alpha");
        assert!(entries[2].is_empty());
    }

    #[test]
    fn test_memory_source_rereads() {
        let mut source = MemoryCorpusSource::new(["a", "b"]);
        assert_eq!(source.read().unwrap().len(), 2);
        assert_eq!(source.read().unwrap().len(), 2);
    }
}
