//! Scanner type definitions.

use std::path::PathBuf;

/// A source file read from the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as produced by the walk (root joined with the relative path)
    pub path: PathBuf,
    /// Decoded file contents
    pub text: String,
}
