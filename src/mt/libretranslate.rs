//! LibreTranslate HTTP provider for machine translation
//!
//! Speaks the LibreTranslate REST API: `POST {base}/translate` with a JSON
//! body `{q, source, target, format}` returning `{translatedText}`.
//!
//! # Configuration
//!
//! The provider reads the endpoint from the `LIBRETRANSLATE_URL` environment
//! variable (e.g. `https://libretranslate.example.com`) and an optional API
//! key from `LIBRETRANSLATE_API_KEY`. Self-hosted instances usually run
//! without a key.

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{MachineTranslator, normalize_locale, validate_locale};
use async_trait::async_trait;
use serde_json::json;

/// LibreTranslate REST API provider
#[derive(Clone)]
pub struct LibreTranslateProvider {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl LibreTranslateProvider {
    /// Per-string character cap; public instances reject larger payloads.
    const MAX_CHARS_PER_STRING: usize = 20_000;

    /// Create a provider for the given endpoint, with an optional API key.
    pub fn new(base_url: String, api_key: Option<String>) -> MtResult<Self> {
        if base_url.trim().is_empty() {
            return Err(MtError::ConfigError(
                "LibreTranslate base URL cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    /// Create a provider from `LIBRETRANSLATE_URL` and the optional
    /// `LIBRETRANSLATE_API_KEY` environment variables.
    pub fn from_env() -> MtResult<Self> {
        let base_url = std::env::var("LIBRETRANSLATE_URL").map_err(|_| {
            MtError::ConfigError("LIBRETRANSLATE_URL environment variable not set".to_string())
        })?;
        let api_key = std::env::var("LIBRETRANSLATE_API_KEY").ok();

        Self::new(base_url, api_key)
    }

    async fn translate_one(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        let url = format!("{}/translate", self.base_url);

        let mut body = json!({
            "q": text,
            "source": normalize_locale(source_locale),
            "target": normalize_locale(target_locale),
            "format": "text"
        });
        if let Some(key) = &self.api_key {
            body["api_key"] = json!(key);
        }

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                MtError::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                MtError::TranslationError(format!("API server error ({}): {}", status, error_text))
            });
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| {
            MtError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        payload["translatedText"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                MtError::TranslationError(
                    "Invalid API response: missing 'translatedText' field".to_string(),
                )
            })
    }

    fn check_length(text: &str) -> MtResult<()> {
        if text.len() > Self::MAX_CHARS_PER_STRING {
            return Err(MtError::TranslationError(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS_PER_STRING
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for LibreTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibreTranslateProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for LibreTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        if text.is_empty() {
            return Ok(String::new());
        }
        Self::check_length(text)?;

        self.translate_one(text, source_locale, target_locale).await
    }

    async fn translate_batch(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>> {
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        for text in texts {
            Self::check_length(text)?;
        }

        // The public API has no batch endpoint; translate sequentially.
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            if text.is_empty() {
                results.push(String::new());
            } else {
                results.push(self.translate_one(text, source_locale, target_locale).await?);
            }
        }
        Ok(results)
    }

    fn provider_name(&self) -> &str {
        "LibreTranslate"
    }
}
