//! Settings file handling and source path matching.
/// Configuration manager
mod manager;
/// Source path matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use manager::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
pub use matcher::{
    MatcherError,
    SourceMatcher,
};
pub use types::{
    ConfigError,
    SyncSettings,
    ValidationError,
};
