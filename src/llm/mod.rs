//! Chat-completion client seam.
//!
//! Providers answer either with a structured completion object or with bare
//! text. Both shapes are normalized into [`ChatResponse`] here so callers
//! only ever ask for [`ChatResponse::content`].

mod deepseek;

pub use deepseek::DeepSeekClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends `prompt` as a single user message. One round trip, no retry.
    async fn chat_completion(&self, model: &str, prompt: &str) -> Result<ChatResponse, LlmError>;
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

impl ChatRequest {
    pub fn user(model: &str, prompt: &str) -> Self {
        ChatRequest {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: Some("user".to_string()),
                content: Some(prompt.to_string()),
            }],
            stream: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChatMessage>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ChatResponse {
    Structured(ChatCompletion),
    RawText(String),
}

impl ChatResponse {
    /// Normalizes a response body. JSON objects are completions, JSON strings
    /// and non-JSON bodies are raw text; any other JSON value is malformed.
    pub fn from_body(body: &str) -> Result<Self, LlmError> {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => serde_json::from_value(value)
                .map_err(|e| LlmError::MalformedResponse(e.to_string())),
            Err(_) => Ok(ChatResponse::RawText(body.to_string())),
        }
    }

    /// `choices[0].message.content`, the raw text, or `""`.
    pub fn content(&self) -> &str {
        match self {
            ChatResponse::Structured(completion) => completion
                .choices
                .first()
                .and_then(|choice| choice.message.as_ref())
                .and_then(|message| message.content.as_deref())
                .unwrap_or(""),
            ChatResponse::RawText(text) => text,
        }
    }
}
