//! Extracts literal keys passed to `trans` from arbitrary source text.
//!
//! Two call conventions are recognized:
//!
//! - function style: `trans("key", ctx)`
//! - template style: `{{ trans "key" .ctx }}`
//!
//! Matching is done with a regular expression, not a parser. Keys containing
//! `", ctx)` or spanning several lines are not recognized, and a non-matching
//! call can swallow text up to the next matching one on the same line.
//!
//! Text is matched exactly as read, with no line ending translation. A call
//! broken after the comma with a CRLF line ending (`trans("k",\r\nctx)`) is not
//! recognized, since each whitespace gap accepts one character only.

use std::sync::LazyLock;

use regex::Regex;

use crate::analyzer::types::{
    TransCall,
    TransCallKind,
};

/// Capture group holding the key of a function style call
const FUNCTION_KEY_GROUP: usize = 1;
/// Capture group holding the key of a template style call
const TEMPLATE_KEY_GROUP: usize = 2;

/// Both call conventions as one alternation so matches never overlap.
///
/// Each whitespace gap accepts at most one whitespace character.
#[allow(clippy::expect_used)]
static TRANS_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"trans\("(.+?)",\s?ctx\)|\{\{\s?trans\s?"(.+?)"\s?\.ctx\s?\}\}"#)
        .expect("trans call pattern is a valid regex")
});

/// Extracts every `trans` call in `source`, in source order.
///
/// Calls whose key is empty after trimming whitespace are dropped.
#[must_use]
pub fn extract_trans_calls(source: &str) -> Vec<TransCall<'_>> {
    TRANS_CALL
        .captures_iter(source)
        .filter_map(|caps| {
            let (key, kind) = caps
                .get(FUNCTION_KEY_GROUP)
                .map(|m| (m, TransCallKind::Function))
                .or_else(|| caps.get(TEMPLATE_KEY_GROUP).map(|m| (m, TransCallKind::Template)))?;

            if key.as_str().trim().is_empty() {
                return None;
            }

            Some(TransCall { key: key.as_str(), kind, offset: key.start() })
        })
        .collect()
}
