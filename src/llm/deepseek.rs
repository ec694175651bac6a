use super::{ChatClient, ChatRequest, ChatResponse, LlmError};
use crate::config::Config;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

/// DeepSeek's OpenAI-compatible chat-completions endpoint.
pub struct DeepSeekClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl DeepSeekClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone(), config.base_url.clone())
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl std::fmt::Debug for DeepSeekClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepSeekClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChatClient for DeepSeekClient {
    async fn chat_completion(&self, model: &str, prompt: &str) -> Result<ChatResponse, LlmError> {
        let url = self.endpoint();
        debug!("POST {} (model {}, {} prompt bytes)", url, model, prompt.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest::user(model, prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Chat completion failed with status {}", status);
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Chat completion returned {} bytes", body.len());
        ChatResponse::from_body(&body)
    }
}
