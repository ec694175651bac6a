#![allow(dead_code)]

use async_trait::async_trait;
use code_requirements::llm::{ChatClient, ChatResponse, LlmError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replies with a fixed script, one entry per call, and records every prompt.
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<ChatResponse, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Result<ChatResponse, LlmError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatClient for ScriptedClient {
    async fn chat_completion(&self, _model: &str, prompt: &str) -> Result<ChatResponse, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::MalformedResponse("script exhausted".into())))
    }
}

pub fn raw(text: &str) -> Result<ChatResponse, LlmError> {
    Ok(ChatResponse::RawText(text.to_string()))
}

pub fn completion(content: &str) -> Result<ChatResponse, LlmError> {
    let body = serde_json::json!({
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    });
    Ok(ChatResponse::from_body(&body.to_string()).unwrap())
}

pub fn api_failure(status: u16) -> Result<ChatResponse, LlmError> {
    Err(LlmError::Api {
        status,
        body: "simulated failure".into(),
    })
}
