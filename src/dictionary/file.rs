//! Translation dictionary file definitions

use std::collections::BTreeMap;
use std::path::{
    Path,
    PathBuf,
};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{
    PrettyFormatter,
    Serializer,
};

use crate::analyzer::KeySet;
use crate::error::SyncError;

/// One per-language dictionary, held in memory between load and write.
///
/// Top-level entries are kept in a `BTreeMap` so serialization is always sorted by
/// key in code point order (UTF-8 byte order). Nested objects keep the order they
/// were read in (`preserve_order`) and numbers keep their original digits
/// (`arbitrary_precision`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    /// Dictionary file path
    path: PathBuf,
    /// Key to translated value
    entries: BTreeMap<String, Value>,
}

impl Dictionary {
    /// Reads and parses a dictionary file.
    ///
    /// # Errors
    /// - the file cannot be read
    /// - the contents are not a JSON object
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        let content = std::fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
        Self::parse(path, &content)
    }

    /// Parses dictionary text. `path` is only used for error reporting and writing.
    ///
    /// Values of any JSON type are kept as they are.
    pub fn parse(path: &Path, content: &str) -> Result<Self, SyncError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|source| SyncError::DictionaryParse { path: path.to_path_buf(), source })?;

        let Value::Object(map) = json else {
            return Err(SyncError::NotAnObject { path: path.to_path_buf() });
        };

        Ok(Self { path: path.to_path_buf(), entries: map.into_iter().collect() })
    }

    /// Language identifier: the file name without its extension.
    ///
    /// # Examples
    /// - `langs/en` → `en`
    /// - `langs/pt-BR.json` → `pt-BR`
    #[must_use]
    pub fn language(&self) -> String {
        self.path
            .file_stem()
            .map_or_else(String::new, |stem| stem.to_string_lossy().into_owned())
    }

    /// Number of entries
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts every key not already present with an empty string value.
    ///
    /// Existing entries, including ones no longer used in source, are left untouched.
    /// Returns the added keys in ascending order.
    pub fn merge_keys(&mut self, keys: &KeySet) -> Vec<String> {
        let mut added = Vec::new();
        for key in keys {
            if !self.entries.contains_key(key) {
                self.entries.insert(key.clone(), Value::String(String::new()));
                added.push(key.clone());
            }
        }
        added.sort_unstable();
        added
    }

    /// Serializes the dictionary.
    ///
    /// Keys are sorted, each nesting level is indented by `indent` spaces, non-ASCII
    /// characters are written as is and there is no trailing newline.
    pub fn render(&self, indent: usize) -> Result<String, SyncError> {
        let indent = " ".repeat(indent);
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        self.entries
            .serialize(&mut serializer)
            .map_err(|source| SyncError::Serialize { path: self.path.clone(), source })?;

        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Overwrites the dictionary file with [`Self::render`].
    pub fn write(&self, indent: usize) -> Result<(), SyncError> {
        let rendered = self.render(indent)?;
        std::fs::write(&self.path, rendered).map_err(|e| SyncError::io(&self.path, e))
    }
}
