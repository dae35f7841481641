//! Exact decoder: put original tag text back in place of placeholders.

use crate::protect::ProtectedTag;

/// Replace placeholder tokens in `translated` with the original tag text.
///
/// Assumes the translation preserved the placeholders literally. Tags are
/// processed from highest to lowest index, each replacing the first literal
/// occurrence of its placeholder; the ordering keeps `TAG_1` from consuming
/// the front of a still-unprocessed `TAG_10`. A placeholder absent from
/// `translated` is silently skipped — detecting leftover or missing tags is
/// the caller's job (see [`crate::restore_locally`]).
///
/// The `tags` list must come from the [`crate::protect`] call on the same
/// logical source text; this is not validated, and violating it yields
/// undefined substitution results. Source text that happens to contain a
/// literal `TAG_N` of its own is likewise unguarded.
pub fn restore(translated: &str, tags: &[ProtectedTag]) -> String {
    let mut result = translated.to_string();

    let mut ordered: Vec<&ProtectedTag> = tags.iter().collect();
    ordered.sort_by(|a, b| b.index.cmp(&a.index));

    for tag in ordered {
        let placeholder = tag.placeholder();
        if let Some(at) = result.find(&placeholder) {
            result.replace_range(at..at + placeholder.len(), &tag.original);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protect::protect;

    #[test]
    fn test_empty_tags_returns_input_unchanged() {
        assert_eq!(restore("unchanged text", &[]), "unchanged text");
        assert_eq!(restore("", &[]), "");
    }

    #[test]
    fn test_identity_translation_roundtrip() {
        let samples = [
            "Press \u{E000} to confirm",
            "[Color:Red]danger[Color:White]",
            "Deal 3[DMG] and gain EXP (Bonus) <b>now</b>",
            "plain text with no tags",
            "",
        ];
        for text in samples {
            let protected = protect(text);
            let restored = restore(&protected.clean_text, &protected.tags);
            assert_eq!(restored, text);
        }
    }

    #[test]
    fn test_restore_into_translated_text() {
        let protected = protect("Press \u{E000} to confirm");
        let restored = restore("اضغط TAG_0 للتأكيد", &protected.tags);
        assert_eq!(restored, "اضغط \u{E000} للتأكيد");
    }

    #[test]
    fn test_missing_placeholder_is_skipped_silently() {
        let protected = protect("\u{E000} start \u{E001}");
        // The translator dropped TAG_1 outright.
        let restored = restore("TAG_0 début", &protected.tags);
        assert_eq!(restored, "\u{E000} début");
    }

    #[test]
    fn test_reordered_placeholders_restore_in_place() {
        let protected = protect("\u{E000} before \u{E001}");
        let restored = restore("TAG_1 後 TAG_0", &protected.tags);
        assert_eq!(restored, "\u{E001} 後 \u{E000}");
    }

    #[test]
    fn test_index_ten_not_eaten_by_index_one() {
        // Eleven glyphs separated by spaces: indices 0..=10.
        let source = (0xE000..=0xE00A)
            .map(|cp| char::from_u32(cp).unwrap().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let protected = protect(&source);
        assert_eq!(protected.tags.len(), 11);
        let restored = restore(&protected.clean_text, &protected.tags);
        assert_eq!(restored, source);
    }

    #[test]
    fn test_first_occurrence_only() {
        let protected = protect("\u{E000}");
        // The translator duplicated the placeholder; only the first copy is
        // replaced, the duplicate is left for the caller to notice.
        let restored = restore("TAG_0 and TAG_0", &protected.tags);
        assert_eq!(restored, "\u{E000} and TAG_0");
    }

    #[test]
    fn test_adjacent_placeholders() {
        let protected = protect("[Color:Red]danger[Color:White]");
        assert_eq!(protected.clean_text, "TAG_0dangerTAG_1");
        let restored = restore("TAG_0gevaarTAG_1", &protected.tags);
        assert_eq!(restored, "[Color:Red]gevaar[Color:White]");
    }
}
