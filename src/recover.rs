//! Heuristic recoverer: reinsert tags the translator deleted outright.
//!
//! When a translation comes back with placeholders (or echoed tags) missing,
//! the exact decoder has nothing to substitute into. This fallback re-scans
//! the original, finds which tags the translation no longer contains, and
//! reinserts them at plausible positions: each missing tag's start offset is
//! mapped proportionally onto the translation and the tag text is inserted at
//! the nearest word boundary at or after that point. The mapping is linear
//! interpolation across strings of different lengths — best effort, not an
//! alignment guarantee.

use crate::catalog::{PatternCatalog, builtin_catalog};

/// Recover tags present in `original` but absent from `translation`, using
/// the builtin catalog.
///
/// Total: always returns a string, never fails. Idempotent: if `translation`
/// already contains every tag of `original`, it is returned unchanged, so a
/// second application is a no-op. Tags the translation echoes verbatim are
/// left untouched, never duplicated or moved.
pub fn restore_locally(original: &str, translation: &str) -> String {
    restore_locally_with(builtin_catalog(), original, translation)
}

/// [`restore_locally`] with a caller-supplied catalog.
pub fn restore_locally_with(
    catalog: &PatternCatalog,
    original: &str,
    translation: &str,
) -> String {
    let source_tags = catalog.scan(original);
    if source_tags.is_empty() {
        return translation.to_string();
    }

    // A tag is missing iff no structurally identical substring exists
    // anywhere in the translation, independent of position.
    let missing: Vec<_> = source_tags
        .iter()
        .filter(|tag| !translation.contains(&tag.text))
        .collect();
    if missing.is_empty() {
        return translation.to_string();
    }

    // Map each missing tag's normalized position onto the translation and
    // snap forward to a word boundary. Source order is ascending by start
    // offset, so insertion points are nondecreasing and tags sharing a
    // boundary keep their relative order.
    let mut insertions: Vec<(usize, &str)> = Vec::with_capacity(missing.len());
    for tag in missing {
        let mapped = tag.start * translation.len() / original.len();
        let at = word_boundary_at_or_after(translation, mapped);
        insertions.push((at, tag.text.as_str()));
    }

    let mut result = String::with_capacity(
        translation.len() + insertions.iter().map(|(_, t)| t.len()).sum::<usize>(),
    );
    let mut cursor = 0;
    for (at, text) in insertions {
        result.push_str(&translation[cursor..at]);
        result.push_str(text);
        cursor = at;
    }
    result.push_str(&translation[cursor..]);
    result
}

/// Smallest word boundary of `text` at or after byte offset `offset`.
///
/// A word boundary is the string edge or a position adjacent to whitespace;
/// inserting there never splits a word. The offset is first snapped forward
/// to a char boundary so interpolated byte positions are safe against
/// multi-byte text.
fn word_boundary_at_or_after(text: &str, offset: usize) -> usize {
    let mut at = offset.min(text.len());
    while !text.is_char_boundary(at) {
        at += 1;
    }
    loop {
        if at == 0 || at == text.len() {
            return at;
        }
        let before = text[..at].chars().next_back();
        let after = text[at..].chars().next();
        match (before, after) {
            (Some(b), Some(a)) => {
                if b.is_whitespace() || a.is_whitespace() {
                    return at;
                }
                at += a.len_utf8();
            }
            _ => return at,
        }
    }
}
