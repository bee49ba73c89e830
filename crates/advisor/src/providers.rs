//! Text-generation providers for the advisory gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::env::AdvisorConfig;
use crate::error::AdvisorError;

/// Provider ID constant
const PROVIDER_ID: &str = "GEMINI";

/// Default HTTP request timeout. Timeouts are the gateway's concern; the
/// core never enforces one.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Single-shot text generation: instruction plus prompt in, text out.
#[async_trait]
pub trait GenerativeProviderTrait: Send + Sync {
    fn id(&self) -> &'static str;

    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, AdvisorError>;
}

// === Gemini generateContent payloads ===

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Gemini text-generation provider.
pub struct GeminiProvider {
    client: Client,
    config: AdvisorConfig,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given configuration.
    pub fn new(config: AdvisorConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }
}

#[async_trait]
impl GenerativeProviderTrait for GeminiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, AdvisorError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AdvisorError::MissingApiKey(PROVIDER_ID.to_string()))?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, api_key
        );

        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AdvisorError::provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AdvisorError::provider(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AdvisorError::provider(e.to_string()))?;

        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AdvisorError::EmptyCompletion(PROVIDER_ID.to_string()));
        }

        Ok(text)
    }
}
