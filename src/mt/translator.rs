//! Machine Translation trait and locale utilities
//!
//! This module defines the `MachineTranslator` trait for provider
//! abstraction, enabling support for different MT backends (LibreTranslate,
//! mock, etc.) without coupling the library to any specific implementation.
//! The translation boundary is untrusted by design: a provider may silently
//! delete placeholders or tag substrings, and the protection pipeline is
//! built to tolerate exactly that.

use crate::mt::error::{MtError, MtResult};
use async_trait::async_trait;

/// Generic trait for machine translation providers
///
/// Implementations handle the actual translation work, whether through an
/// API or deterministic test logic. All methods are async to support
/// I/O-bound operations like network requests.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text string from source to target locale.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `source_locale` - Source language code (e.g., "en", "en-US")
    /// * `target_locale` - Target language code (e.g., "ar", "ja")
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String>;

    /// Translate multiple strings in a single batch operation.
    ///
    /// # Guarantees
    ///
    /// - Output order matches input order
    /// - Output length equals input length
    /// - Each translation is independent
    async fn translate_batch(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>>;

    /// Name of this provider, for diagnostics.
    fn provider_name(&self) -> &str;
}

/// Normalize a locale code by stripping region and script information:
/// `en-US` → `en`, `zh-Hans` → `zh`, `fr` → `fr`.
pub fn normalize_locale(locale: &str) -> String {
    locale.split('-').next().unwrap_or(locale).to_lowercase()
}

/// Validate that a locale code is in acceptable format: non-empty,
/// alphanumerics plus hyphen/underscore only.
pub fn validate_locale(locale: &str) -> MtResult<()> {
    if locale.is_empty() {
        return Err(MtError::InvalidLocale("Locale code is empty".to_string()));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MtError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}
