//! Mock machine translator for testing
//!
//! A deterministic, API-free translator for exercising the protection
//! pipeline without network access. The modes cover the boundary's failure
//! surface, most importantly `DropMarkup`: a translator that silently
//! deletes placeholder tokens and icon glyphs, which is the failure the
//! heuristic recoverer exists for.

use crate::mt::error::MtResult;
use crate::mt::translator::MachineTranslator;
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;

static PLACEHOLDER_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TAG_[0-9]+ ?").expect("placeholder token pattern"));

/// Mock translation modes for testing different boundary behaviors
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append locale suffix: "hello" → "hello_ar".
    /// Preserves placeholders, so the exact decoder suffices.
    Suffix,

    /// Use predefined mappings for realistic translations:
    /// (text, target_locale) → translation. Falls back to Suffix.
    Mappings(HashMap<(String, String), String>),

    /// Reverse word order, simulating word-order-changing languages.
    Reorder,

    /// Delete placeholder tokens and private-use glyphs, simulating a
    /// translator that swallows markup outright.
    DropMarkup,

    /// Simulate API errors
    Error(String),

    /// No-op: return input unchanged
    NoOp,
}

/// Mock translator that simulates various boundary behaviors
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Create a MockTranslator with simulated network delay
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self { mode, delay_ms }
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, text: &str, _source: &str, target: &str) -> MtResult<String> {
        use crate::mt::error::MtError;

        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Reorder => {
                let words: Vec<&str> = text.split_whitespace().collect();
                Ok(words.into_iter().rev().collect::<Vec<_>>().join(" "))
            }
            MockMode::DropMarkup => {
                let without_tokens = PLACEHOLDER_TOKEN_RE.replace_all(text, "");
                let stripped: String = without_tokens
                    .chars()
                    .filter(|c| !crate::catalog::is_private_use(*c))
                    .collect();
                Ok(stripped.trim().to_string())
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        self.apply_delay().await;
        self.apply_translation(text, source_locale, target_locale)
    }

    async fn translate_batch(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>> {
        self.apply_delay().await;
        texts
            .iter()
            .map(|t| self.apply_translation(t, source_locale, target_locale))
            .collect()
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
