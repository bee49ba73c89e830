//! Chat transcript types shared with the presentation layer.

use serde::{Deserialize, Serialize};

/// Who said a message in the advisor conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Advisor,
}

/// One entry of the advisor conversation. The transcript lives in session
/// memory only; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn advisor(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Advisor,
            text: text.into(),
        }
    }
}
