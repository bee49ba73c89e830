//! Advisory gateway error types.

use thiserror::Error;

/// Errors raised while requesting a completion. These stay internal to the
/// gateway; the caller-facing service maps every one of them to a fixed
/// message.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider transport or API error.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider answered without any usable text.
    #[error("Empty completion from provider {0}")]
    EmptyCompletion(String),
}

impl AdvisorError {
    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            AdvisorError::MissingApiKey(_) => "MISSING_API_KEY",
            AdvisorError::Provider(_) => "PROVIDER_ERROR",
            AdvisorError::EmptyCompletion(_) => "EMPTY_COMPLETION",
        }
    }
}
