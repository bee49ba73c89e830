//! Caller-facing advice service.
//!
//! The one async seam in the whole system: a single-shot call that may
//! take unbounded time and may fail. Callers never see an error; every
//! failure maps to a fixed message.

use std::sync::Arc;

use log::error;

use crate::error::AdvisorError;
use crate::providers::GenerativeProviderTrait;

/// Persona and guardrails sent with every advice request.
const SYSTEM_INSTRUCTION: &str = "You are the AI financial advisor for Moneta. Your goal is to \
provide clear, insightful, and unbiased investment guidance that helps users make informed \
decisions.
- Do not provide legally binding financial advice. Always include a disclaimer that users should \
consult a qualified professional.
- Keep your responses concise and easy to understand for a general audience.
- When suggesting funds or strategies, briefly explain the rationale behind your recommendations.
- Be encouraging and positive in your tone.";

/// Returned verbatim whenever the provider call fails.
pub const FALLBACK_MESSAGE: &str = "I'm sorry, I'm having trouble connecting to my knowledge \
base right now. Please try again later.";

/// Returned when no API key is configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "The advisor is not configured. Please set the GEMINI_API_KEY environment variable.";

/// Advisory service over a pluggable text-generation provider.
pub struct AdvisorService {
    provider: Arc<dyn GenerativeProviderTrait>,
}

impl AdvisorService {
    pub fn new(provider: Arc<dyn GenerativeProviderTrait>) -> Self {
        Self { provider }
    }

    /// Requests advice for a free-text prompt.
    ///
    /// Infallible from the caller's point of view: provider failures are
    /// logged and mapped to a fixed user-facing message.
    pub async fn get_investment_advice(&self, prompt: &str) -> String {
        match self.provider.generate(SYSTEM_INSTRUCTION, prompt).await {
            Ok(text) => text,
            Err(AdvisorError::MissingApiKey(_)) => NOT_CONFIGURED_MESSAGE.to_string(),
            Err(err) => {
                error!(
                    "Error fetching investment advice from provider {}: {} ({})",
                    self.provider.id(),
                    err,
                    err.code()
                );
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
