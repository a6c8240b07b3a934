//! Clients for the upstream transcription and summarization APIs.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

mod client;
mod types;

pub use client::OpenAiClient;

/// Speech-to-text and summarization operations the handlers depend on.
#[async_trait]
pub trait SpeechApi: Send + Sync {
    /// Transcribe the audio file at `file_path`.
    ///
    /// The upstream infers the audio format from the file extension.
    async fn transcribe(&self, file_path: &Path) -> Result<String>;

    /// Summarize a transcription.
    async fn summarize(&self, transcription: &str) -> Result<String>;
}
