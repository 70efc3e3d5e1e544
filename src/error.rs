use std::path::PathBuf;

use thiserror::Error;

use crate::config::{
    ConfigError,
    MatcherError,
};

/// Defines errors that abort a synchronization run
#[derive(Error, Debug)]
pub enum SyncError {
    /// Settings could not be loaded or failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Exclude patterns could not be compiled
    #[error(transparent)]
    Matcher(#[from] MatcherError),
    /// Error while walking the source tree
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),
    /// Error when failing to read or write a file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Source file is not valid UTF-8
    #[error("Failed to decode {} as UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    /// Dictionary file is not valid JSON
    #[error("Failed to parse dictionary {}: {source}", path.display())]
    DictionaryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Dictionary file is valid JSON but not an object
    #[error("Dictionary {} is not a JSON object", path.display())]
    NotAnObject { path: PathBuf },
    /// Error when serializing a dictionary back to text
    #[error("Failed to serialize dictionary {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
