//! Path matcher for the source walk.

use std::ffi::OsStr;
use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::SyncSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Decides which directories and files the scanner skips.
#[derive(Debug, Clone)]
pub struct SourceMatcher {
    root: PathBuf,
    exclude_dir_names: Vec<String>,
    exclude_set: GlobSet,
}

impl SourceMatcher {
    /// Creates a new matcher from settings.
    pub fn new(root: PathBuf, settings: &SyncSettings) -> Result<Self, MatcherError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &settings.exclude_patterns {
            let glob = Glob::new(pattern).map_err(|source| MatcherError::InvalidExcludePattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }

        Ok(Self {
            root,
            exclude_dir_names: settings.exclude_dir_names.clone(),
            exclude_set: builder.build()?,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns true if a directory with this name must not be descended into.
    ///
    /// Only the final path component is compared, so `langs` is pruned at any depth.
    #[must_use]
    pub fn is_excluded_dir_name(&self, name: &OsStr) -> bool {
        self.exclude_dir_names.iter().any(|excluded| OsStr::new(excluded) == name)
    }

    /// Returns true if the file matches `excludePatterns`.
    ///
    /// The path must be absolute and under the root. Paths outside the root
    /// are never excluded.
    #[must_use]
    pub fn is_excluded_file(&self, absolute_path: &Path) -> bool {
        let Ok(relative_path) = absolute_path.strip_prefix(&self.root) else {
            return false;
        };

        self.exclude_set.is_match(relative_path)
    }
}
