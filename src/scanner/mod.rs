//! Source tree scanning.

pub mod types;
pub mod walker;

pub use types::SourceFile;
pub use walker::SourceWalker;
