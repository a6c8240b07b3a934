//! Wire types for the OpenAI-compatible API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned by the transcription endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TranscriptionResponse {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl TranscriptionResponse {
    /// Human-readable description of an error payload.
    ///
    /// `null`, `false`, `0` and `""` do not count as errors.
    pub fn error_message(&self) -> Option<String> {
        let error = self.error.as_ref()?;
        let is_set = match error {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        };
        if !is_set {
            return None;
        }
        Some(
            error
                .get("message")
                .and_then(|m| m.as_str())
                .or_else(|| error.as_str())
                .map(String::from)
                .unwrap_or_else(|| error.to_string()),
        )
    }
}

/// Request body for the chat completion endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn user(content: String) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content),
        }
    }
}

/// Body returned by the chat completion endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatCompletionResponse {
    /// Content of every choice, newline-joined.
    pub fn joined_content(&self) -> String {
        self.choices
            .iter()
            .map(|choice| choice.message.content.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Prompt sent to the completion endpoint for a transcription.
pub(crate) fn summary_prompt(transcription: &str) -> String {
    format!(
        "Summarize the following transcription:\n\n{}\n\nSummary:",
        transcription
    )
}
