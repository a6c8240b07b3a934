//! HTTP response bodies.

use serde::{Deserialize, Serialize};

/// Response carrying only a message, used for the greeting and for errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response to a chunk upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Upload status text
    pub message: String,
    /// Transcription of this chunk alone
    pub transcription: String,
}

/// Response to a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub message: String,
    pub summary: String,
}
