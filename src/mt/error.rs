/// Error types for the machine translation boundary
///
/// The protection core itself is total and never fails; errors only arise at
/// the external translation boundary (configuration, network, provider).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Provider configuration problem (missing endpoint, bad API key)
    ConfigError(String),
    /// Transport-level failure talking to the provider
    NetworkError(String),
    /// The provider rejected or failed the translation
    TranslationError(String),
    /// Malformed locale code
    InvalidLocale(String),
    /// General error with context
    Other(String),
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            MtError::TranslationError(msg) => write!(f, "Translation error: {}", msg),
            MtError::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
            MtError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        MtError::NetworkError(err.to_string())
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;
