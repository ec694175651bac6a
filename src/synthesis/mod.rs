//! Turns source text into requirement sentences with one chat-completion
//! call per request.

mod prompts;

use crate::llm::{ChatClient, LlmError};
use crate::parsers::Language;
use log::{debug, warn};
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Lines of the system-level answer that carry a requirement start with this.
pub const LINE_MARKER: &str = "Text:";

pub const SYSTEM_ERROR_PREFIX: &str = "⚠️ Error generating high-level requirements";
pub const FUNCTION_ERROR_PREFIX: &str = "⚠️ Error generating functional requirement";

static REQUIREMENT_ID: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:RQ[-\w]*|ID\b)\s*[:\-.]?\s*")
        .map_err(|e| warn!("Failed to compile requirement id pattern: {}", e))
        .ok()
});

pub struct Synthesizer {
    client: Arc<dyn ChatClient>,
    model: String,
}

impl Synthesizer {
    pub fn new(client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// System-level requirements for a whole document. A failed call becomes
    /// a single error line.
    pub async fn synthesize_system_requirements(&self, language: Language, source: &str) -> Vec<String> {
        match self.try_system_requirements(language, source).await {
            Ok(lines) => lines,
            Err(e) => vec![system_error_text(&e)],
        }
    }

    /// One requirement sentence for one function. A failed call becomes an
    /// inline error string.
    pub async fn synthesize_function_requirement(&self, name: &str, snippet: &str) -> String {
        match self.try_function_requirement(name, snippet).await {
            Ok(text) => text,
            Err(e) => function_error_text(&e),
        }
    }

    pub async fn try_system_requirements(
        &self,
        language: Language,
        source: &str,
    ) -> Result<Vec<String>, LlmError> {
        let prompt = prompts::system_requirements(language, source);
        let response = self.client.chat_completion(&self.model, &prompt).await?;
        let lines = parse_marked_lines(response.content());
        debug!("Model returned {} system-level requirements", lines.len());
        Ok(lines)
    }

    pub async fn try_function_requirement(&self, name: &str, snippet: &str) -> Result<String, LlmError> {
        let prompt = prompts::function_requirement(name, snippet);
        let response = self.client.chat_completion(&self.model, &prompt).await?;
        Ok(strip_requirement_id(response.content()))
    }
}

pub fn system_error_text(error: &LlmError) -> String {
    format!("{}: {}", SYSTEM_ERROR_PREFIX, error)
}

pub fn function_error_text(error: &LlmError) -> String {
    format!("{}: {}", FUNCTION_ERROR_PREFIX, error)
}

/// Keeps the lines that start with [`LINE_MARKER`], without the marker.
pub fn parse_marked_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix(LINE_MARKER))
        .map(|rest| rest.trim().to_string())
        .filter(|rest| !rest.is_empty())
        .collect()
}

/// Trims the answer and drops one leading `RQ-…` or `ID:` token.
pub fn strip_requirement_id(content: &str) -> String {
    let text = content.trim();
    match REQUIREMENT_ID.as_ref() {
        Some(pattern) => pattern.replace(text, "").into_owned(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_lines_are_kept_and_stripped() {
        let content = "Here are the requirements:\n\
                       Text: The system shall accept code.\n\
                       \n   Text:   The system shall export CSV.  \n\
                       - Text: bulleted lines are ignored\n\
                       Text:\n\
                       Done.";
        assert_eq!(
            parse_marked_lines(content),
            vec!["The system shall accept code.", "The system shall export CSV."]
        );
    }

    #[test]
    fn nothing_marked_means_nothing_kept() {
        assert!(parse_marked_lines("The system shall do things.").is_empty());
        assert!(parse_marked_lines("").is_empty());
    }

    #[test]
    fn requirement_ids_are_removed() {
        assert_eq!(
            strip_requirement_id("  RQ-001: The system shall add numbers.\n"),
            "The system shall add numbers."
        );
        assert_eq!(
            strip_requirement_id("rq_12 The system shall log."),
            "The system shall log."
        );
        assert_eq!(
            strip_requirement_id("ID: The system shall validate input."),
            "The system shall validate input."
        );
        assert_eq!(
            strip_requirement_id("ID - The system shall retry."),
            "The system shall retry."
        );
    }

    #[test]
    fn words_starting_with_id_survive() {
        assert_eq!(
            strip_requirement_id("Identify the caller before saving."),
            "Identify the caller before saving."
        );
        assert_eq!(
            strip_requirement_id("The system shall add numbers."),
            "The system shall add numbers."
        );
    }

    #[test]
    fn error_texts_are_prefixed() {
        let error = LlmError::Api {
            status: 401,
            body: "unauthorized".into(),
        };
        assert_eq!(
            function_error_text(&error),
            "⚠️ Error generating functional requirement: API error 401: unauthorized"
        );
        assert!(system_error_text(&error).starts_with(SYSTEM_ERROR_PREFIX));
    }
}
