//! Environment-driven advisor configuration.

use std::env;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Configuration for the advisory gateway.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// API key, `None` when the environment is not configured. A missing
    /// key is a benign state, not a startup failure.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
}

impl AdvisorConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Configuration with an explicit API key, for embedders that manage
    /// secrets themselves.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}
