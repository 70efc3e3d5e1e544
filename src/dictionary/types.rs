//! Dictionary type definitions.

use std::path::PathBuf;

/// Whether synchronized dictionaries are written back to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Overwrite every dictionary file
    #[default]
    Write,
    /// Compute the merge only; files stay untouched
    DryRun,
}

/// Outcome of synchronizing one dictionary file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryReport {
    pub path: PathBuf,
    /// Language identifier taken from the file name
    pub language: String,
    /// Keys that were missing, in ascending order
    pub added: Vec<String>,
    /// Number of entries after the merge
    pub total: usize,
}
