//! Types for the analyzer module

use std::collections::HashSet;
use std::collections::hash_set;

/// Which call convention a key was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransCallKind {
    /// `trans("key", ctx)`
    Function,
    /// `{{ trans "key" .ctx }}`
    Template,
}

/// A single `trans` call found in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransCall<'a> {
    /// Translation key, verbatim as written between the quotes
    pub key: &'a str,
    /// Call convention
    pub kind: TransCallKind,
    /// Byte offset of the key within the source text
    pub offset: usize,
}

/// Unique translation keys collected from every scanned file.
///
/// Keys are compared verbatim: no case folding, trimming or Unicode normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    /// Collected keys
    keys: HashSet<String>,
}

impl KeySet {
    /// 空のキー集合を作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// キーを追加する。既に存在した場合は `false`
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates the keys in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.keys.iter()
    }

    /// Returns the keys in ascending code point order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { keys: iter.into_iter().map(Into::into).collect() }
    }
}

impl<S: Into<String>> Extend<S> for KeySet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.keys.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a KeySet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
