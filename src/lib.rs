//! tagshield protects non-translatable technical markup embedded in
//! game-localization strings — icon glyph codes, bracket and brace variable
//! tags, format markers, fixed stat abbreviations — before the text is sent
//! to a translation process, and restores that markup afterward, including
//! when the translator silently drops or corrupts it.
//!
//! The flow is protect → translate (external) → restore:
//!
//! ```
//! use tagshield::{protect, restore, restore_locally};
//!
//! let source = "Press \u{E000} to confirm";
//! let protected = protect(source);
//! assert_eq!(protected.clean_text, "Press TAG_0 to confirm");
//!
//! // A well-behaved translator keeps the placeholder...
//! let translated = "اضغط TAG_0 للتأكيد";
//! assert_eq!(restore(translated, &protected.tags), "اضغط \u{E000} للتأكيد");
//!
//! // ...a lossy one deletes it; the recoverer puts the tag back anyway.
//! let recovered = restore_locally(source, "اضغط للتأكيد");
//! assert!(recovered.contains('\u{E000}'));
//! ```
//!
//! All three operations are pure, total over arbitrary strings, and safe to
//! call concurrently. The async machine-translation boundary (providers,
//! mock, pipeline) lives in [`mt`].

pub mod catalog;
pub mod mt;
pub mod protect;
pub mod recover;
pub mod restore;
pub mod store;

pub use catalog::{CandidateMatch, PatternCatalog, TagPattern, builtin_catalog};
pub use protect::{PLACEHOLDER_PREFIX, ProtectedTag, ProtectedText, protect, protect_with};
pub use recover::{restore_locally, restore_locally_with};
pub use restore::restore;
pub use store::TranslationStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protect_restore_roundtrip_over_identity_boundary() {
        let samples = [
            "Press \u{E000} to confirm",
            "Use \u{E000}\u{E001}\u{E002} here",
            "[Color:Red]danger[Color:White]",
            "Gain 50 EXP and {gold} coins (Bonus)",
            "no tags at all",
            "",
        ];
        for text in samples {
            let protected = protect(text);
            assert_eq!(restore(&protected.clean_text, &protected.tags), text);
        }
    }

    #[test]
    fn test_restore_locally_leaves_intact_translations_alone() {
        let original = "\u{E000} text \u{E001}";
        let translation = "\u{E000} نص \u{E001}";
        assert_eq!(restore_locally(original, translation), translation);
    }
}
