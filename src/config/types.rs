use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Upper bound for `indent`; anything wider is almost certainly a typo.
const MAX_INDENT: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncSettings {
    /// Directory holding the per-language dictionaries, relative to the root.
    pub dictionary_dir: String,

    /// Directory names pruned from the source walk at any depth.
    pub exclude_dir_names: Vec<String>,

    /// Globs (relative to the root) of source files that are never scanned.
    pub exclude_patterns: Vec<String>,

    /// Spaces per nesting level in rewritten dictionaries.
    pub indent: usize,

    /// Warn about and skip source files that are not valid UTF-8.
    ///
    /// - `false`: the first undecodable file aborts the run (default)
    /// - `true`: the file is skipped and reported as a warning
    pub skip_undecodable: bool,
}

impl SyncSettings {
    /// # Errors
    /// - Required field is empty
    /// - Directory name contains a path separator
    /// - Invalid glob pattern
    /// - Indent too wide
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.dictionary_dir.trim().is_empty() {
            errors.push(ValidationError::new(
                "dictionaryDir",
                "The directory cannot be empty. Example: \"langs\"",
            ));
        }

        for (index, name) in self.exclude_dir_names.iter().enumerate() {
            if name.is_empty() {
                errors.push(ValidationError::new(
                    format!("excludeDirNames[{index}]"),
                    "The directory name cannot be empty",
                ));
            } else if name.contains(['/', '\\']) {
                errors.push(ValidationError::new(
                    format!("excludeDirNames[{index}]"),
                    format!(
                        "'{name}' is not a plain directory name. Use excludePatterns for paths"
                    ),
                ));
            }
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if self.indent > MAX_INDENT {
            errors.push(ValidationError::new(
                "indent",
                format!("The indent must be between 0 and {MAX_INDENT}, got {}", self.indent),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            dictionary_dir: "langs".to_string(),
            exclude_dir_names: vec!["langs".to_string()],
            exclude_patterns: Vec::new(),
            indent: 1,
            skip_undecodable: false,
        }
    }
}
