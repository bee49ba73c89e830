//! Moneta Advisor - the advisory gateway.
//!
//! Wraps a third-party text-generation API behind a single-shot
//! request/response contract: free-text prompt in, free-text advice out.
//! Failures never escape this crate; callers receive a fixed fallback
//! message instead. There is no retry, no backoff, and no streaming.
//!
//! - `advice`: the caller-facing service with the fallback behavior
//! - `providers`: provider trait and the Gemini REST implementation
//! - `env`: environment-driven configuration (API key, model)
//! - `error`: gateway error types
//! - `types`: chat transcript types shared with the presentation layer

pub mod advice;
pub mod env;
pub mod error;
pub mod providers;
pub mod types;

// Re-export main types for convenience
pub use advice::{AdvisorService, FALLBACK_MESSAGE, NOT_CONFIGURED_MESSAGE};
pub use env::AdvisorConfig;
pub use error::AdvisorError;
pub use providers::{GeminiProvider, GenerativeProviderTrait};
pub use types::{ChatMessage, ChatRole};
