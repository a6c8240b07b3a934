//! HTTP client for the OpenAI-compatible transcription and completion APIs.

use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, info, instrument};

use super::types::{
    summary_prompt, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    TranscriptionResponse,
};
use super::SpeechApi;
use crate::error::{RelayError, Result};
use crate::types::RelayConfig;

/// Client for the upstream transcription and summarization endpoints.
pub struct OpenAiClient {
    client: Client,
    transcriptions_url: String,
    completions_url: String,
    api_key: String,
    transcription_model: String,
    transcription_language: String,
    summary_model: String,
    summary_max_tokens: u32,
    summary_temperature: f32,
}

impl OpenAiClient {
    /// Create a new client from the relay configuration.
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.upstream_timeout())
            .build()?;
        let base_url = config.api_base_url();

        Ok(Self {
            client,
            transcriptions_url: format!("{}/v1/audio/transcriptions", base_url),
            completions_url: format!("{}/v1/chat/completions", base_url),
            api_key: config.open_ai_api_key.clone(),
            transcription_model: config.transcription_model.clone(),
            transcription_language: config.transcription_language.clone(),
            summary_model: config.summary_model.clone(),
            summary_max_tokens: config.summary_max_tokens,
            summary_temperature: config.summary_temperature,
        })
    }

    /// URL of the transcription endpoint.
    pub fn transcriptions_url(&self) -> &str {
        &self.transcriptions_url
    }

    /// URL of the chat completion endpoint.
    pub fn completions_url(&self) -> &str {
        &self.completions_url
    }
}

#[async_trait]
impl SpeechApi for OpenAiClient {
    #[instrument(skip(self))]
    async fn transcribe(&self, file_path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(file_path).await?;
        let file_name = file_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("audio")
            .to_string();

        debug!(bytes = bytes.len(), file_name = %file_name, "Sending chunk for transcription");

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("model", self.transcription_model.clone())
            .text("language", self.transcription_language.clone());

        let response = self
            .client
            .post(&self.transcriptions_url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RelayError::Transcription(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(RelayError::Transcription(format!(
                "upstream returned {}: {}",
                status, text
            )));
        }

        let payload: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| RelayError::Transcription(format!("invalid response body: {}", e)))?;

        if let Some(message) = payload.error_message() {
            return Err(RelayError::Transcription(format!(
                "upstream reported error: {}",
                message
            )));
        }

        let text = payload.text.ok_or_else(|| {
            RelayError::Transcription("response is missing the `text` field".to_string())
        })?;

        info!(chars = text.len(), "Chunk transcribed");
        Ok(text)
    }

    #[instrument(skip(self, transcription), fields(chars = transcription.len()))]
    async fn summarize(&self, transcription: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.summary_model,
            messages: vec![ChatMessage::user(summary_prompt(transcription))],
            max_tokens: self.summary_max_tokens,
            temperature: self.summary_temperature,
        };

        let response = self
            .client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Summarization(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(RelayError::Summarization(format!(
                "upstream returned {}: {}",
                status, text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| RelayError::Summarization(format!("invalid response body: {}", e)))?;

        info!(choices = completion.choices.len(), "Transcription summarized");
        Ok(completion.joined_content())
    }
}
