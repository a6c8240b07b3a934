//! Transcription Relay Library
//!
//! A thin HTTP relay that accepts audio file chunks, forwards each chunk to a
//! speech-transcription API and forwards transcripts to a summarization API.

pub mod api;
pub mod error;
pub mod types;
pub mod upstream;

#[cfg(test)]
mod test_support;

pub use api::{build_router, AppState};
pub use error::{RelayError, Result};
pub use types::{ChunkPosition, RelayConfig, UploadStatus};
pub use upstream::{OpenAiClient, SpeechApi};

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default transcription model
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";

/// Default transcription language (ISO-639-1)
pub const DEFAULT_TRANSCRIPTION_LANGUAGE: &str = "en";

/// Default chat completion model used for summaries
pub const DEFAULT_SUMMARY_MODEL: &str = "gpt-3.5-turbo";

/// Default completion token budget for a summary
pub const DEFAULT_SUMMARY_MAX_TOKENS: u32 = 150;

/// Default sampling temperature for a summary
pub const DEFAULT_SUMMARY_TEMPERATURE: f32 = 0.5;

/// Default timeout for upstream API calls, in seconds
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 120;

/// Maximum request body size (25MB, the transcription API's upload ceiling)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;
