//! Encoder: replace protected markup with placeholder tokens.
//!
//! [`protect`] scans a source string with the pattern catalog and produces a
//! clean string in which every accepted tag span is replaced by a placeholder
//! token (`TAG_0`, `TAG_1`, ...). The clean text is what crosses the
//! translation boundary; the returned tag list is what [`crate::restore`]
//! needs to put the markup back.
//!
//! # Example
//!
//! ```
//! use tagshield::protect;
//!
//! let protected = protect("Press \u{E000} to confirm");
//! assert_eq!(protected.clean_text, "Press TAG_0 to confirm");
//! assert_eq!(protected.tags[0].original, "\u{E000}");
//! ```

use crate::catalog::{PatternCatalog, builtin_catalog};
use serde::Serialize;

/// Literal prefix of every placeholder token.
pub const PLACEHOLDER_PREFIX: &str = "TAG_";

/// A protected tag: the verbatim matched substring, its start offset in the
/// source text, and its 0-based rank by ascending offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectedTag {
    pub index: usize,
    pub original: String,
    pub position: usize,
}

impl ProtectedTag {
    /// The placeholder token emitted for this tag, `TAG_` plus the index in
    /// decimal. Indices whose decimal forms are prefixes of one another (1
    /// and 10) are disambiguated by the decode order of [`crate::restore`],
    /// not by the token itself.
    pub fn placeholder(&self) -> String {
        format!("{}{}", PLACEHOLDER_PREFIX, self.index)
    }
}

/// Result of [`protect`]: the clean text sent to the translator plus the tags
/// it was stripped of, ordered ascending by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectedText {
    pub clean_text: String,
    pub tags: Vec<ProtectedTag>,
}

/// Protect `text` using the builtin catalog.
///
/// Pure and total: an input with no catalog matches comes back unchanged with
/// an empty tag list.
pub fn protect(text: &str) -> ProtectedText {
    protect_with(builtin_catalog(), text)
}

/// Protect `text` using a caller-supplied catalog (custom tag dialects).
pub fn protect_with(catalog: &PatternCatalog, text: &str) -> ProtectedText {
    let spans = catalog.scan(text);

    let mut clean_text = String::with_capacity(text.len());
    let mut tags = Vec::with_capacity(spans.len());
    let mut cursor = 0;

    for (index, span) in spans.into_iter().enumerate() {
        clean_text.push_str(&text[cursor..span.start]);
        clean_text.push_str(PLACEHOLDER_PREFIX);
        clean_text.push_str(&index.to_string());
        cursor = span.end;
        tags.push(ProtectedTag {
            index,
            original: span.text,
            position: span.start,
        });
    }
    clean_text.push_str(&text[cursor..]);

    ProtectedText { clean_text, tags }
}
