//! Error types for the relay.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::types::MessageResponse;

/// Errors raised while relaying a request.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The incoming multipart body was malformed or incomplete.
    #[error("{0}")]
    Parse(String),

    /// The transcription API failed or reported an error.
    #[error("transcription failed: {0}")]
    Transcription(String),

    /// The summarization API failed or returned an unusable body.
    #[error("summarization failed: {0}")]
    Summarization(String),

    /// Temporary chunk storage failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Startup configuration was missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The outbound HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl From<config::ConfigError> for RelayError {
    fn from(err: config::ConfigError) -> Self {
        RelayError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

impl RelayError {
    /// Message returned to the client in the error body.
    pub fn client_message(&self) -> String {
        match self {
            RelayError::Parse(detail) => format!("Error parsing the files: {}", detail),
            other => format!("Server Error: {}", other),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");

        let body = MessageResponse {
            message: self.client_message(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = RelayError::Parse("missing field `chunk`".to_string());
        assert_eq!(
            err.client_message(),
            "Error parsing the files: missing field `chunk`"
        );
    }

    #[test]
    fn test_upstream_error_message() {
        let err = RelayError::Transcription("upstream returned 401".to_string());
        assert_eq!(
            err.client_message(),
            "Server Error: transcription failed: upstream returned 401"
        );
    }

    #[test]
    fn test_errors_map_to_internal_server_error() {
        let response = RelayError::Summarization("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = RelayError::Parse("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
