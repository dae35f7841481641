//! Protected translation pipeline
//!
//! Orchestrates the full flow around the untrusted translation boundary:
//! protect the source text, hand the clean text to a [`MachineTranslator`],
//! decode surviving placeholders exactly, then run the heuristic recoverer
//! as a safety net for anything the translator swallowed. Lossy outcomes are
//! reported as data on the result, never as errors.

use crate::catalog::PatternCatalog;
use crate::mt::error::MtResult;
use crate::mt::translator::MachineTranslator;
use crate::protect::protect_with;
use crate::recover::restore_locally_with;
use crate::restore::restore;
use crate::store::TranslationStore;
use serde::Serialize;

/// Outcome of translating one protected entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectedTranslation {
    /// The source text as given.
    pub source: String,
    /// The translation with markup restored.
    pub output: String,
    /// Indices of tags whose placeholders did not survive translation and
    /// were reinserted heuristically.
    pub recovered: Vec<usize>,
    /// Human-readable notes about the recovery, for the review surface.
    pub warnings: Vec<String>,
}

/// Translate `text` across the boundary with markup protection.
///
/// Fails only if the translator itself fails; tag loss is tolerated and
/// reported on the result.
pub async fn translate_protected(
    catalog: &PatternCatalog,
    translator: &dyn MachineTranslator,
    text: &str,
    source_locale: &str,
    target_locale: &str,
) -> MtResult<ProtectedTranslation> {
    let protected = protect_with(catalog, text);
    let translated = translator
        .translate(&protected.clean_text, source_locale, target_locale)
        .await?;

    let restored = restore(&translated, &protected.tags);

    let mut recovered = Vec::new();
    let mut warnings = Vec::new();
    for tag in &protected.tags {
        if !restored.contains(&tag.original) {
            recovered.push(tag.index);
            warnings.push(format!(
                "placeholder {} was dropped by {}; tag reinserted heuristically",
                tag.placeholder(),
                translator.provider_name()
            ));
        }
    }

    let output = if recovered.is_empty() {
        restored
    } else {
        restore_locally_with(catalog, text, &restored)
    };

    Ok(ProtectedTranslation {
        source: text.to_string(),
        output,
        recovered,
        warnings,
    })
}

/// Translate every entry of a [`TranslationStore`] with markup protection.
///
/// Entries are processed in key order; the clean texts cross the boundary as
/// one batch. Returns `(key, result)` pairs in the same order.
pub async fn translate_store(
    catalog: &PatternCatalog,
    translator: &dyn MachineTranslator,
    store: &TranslationStore,
    source_locale: &str,
    target_locale: &str,
) -> MtResult<Vec<(String, ProtectedTranslation)>> {
    let mut keys: Vec<&String> = store.entries().keys().collect();
    keys.sort();

    let protected: Vec<_> = keys
        .iter()
        .map(|key| protect_with(catalog, store.get_or_default(key.as_str(), "")))
        .collect();
    let clean_texts: Vec<String> = protected.iter().map(|p| p.clean_text.clone()).collect();

    let translated = translator
        .translate_batch(&clean_texts, source_locale, target_locale)
        .await?;

    let mut results = Vec::with_capacity(keys.len());
    for ((key, entry), translation) in keys.iter().zip(protected).zip(translated) {
        let source = store.get_or_default(key.as_str(), "");
        let restored = restore(&translation, &entry.tags);

        let mut recovered = Vec::new();
        let mut warnings = Vec::new();
        for tag in &entry.tags {
            if !restored.contains(&tag.original) {
                recovered.push(tag.index);
                warnings.push(format!(
                    "{}: placeholder {} was dropped by {}; tag reinserted heuristically",
                    key,
                    tag.placeholder(),
                    translator.provider_name()
                ));
            }
        }

        let output = if recovered.is_empty() {
            restored
        } else {
            restore_locally_with(catalog, source, &restored)
        };

        results.push((
            (*key).clone(),
            ProtectedTranslation {
                source: source.to_string(),
                output,
                recovered,
                warnings,
            },
        ));
    }

    Ok(results)
}
