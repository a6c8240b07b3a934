//! HTTP request handlers for the relay.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::multipart::{read_chunk_upload, read_transcription};
use crate::error::Result;
use crate::types::{MessageResponse, RelayConfig, SummaryResponse, UploadResponse, UploadStatus};
use crate::upstream::SpeechApi;

/// Application state shared across handlers.
pub struct AppState {
    pub api: Arc<dyn SpeechApi>,
    pub config: RelayConfig,
}

/// Greeting endpoint, doubles as a health check.
pub async fn greeting() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello".to_string(),
    })
}

/// Receive one audio chunk and return its transcription.
#[instrument(skip_all, fields(upload_id = %Uuid::new_v4()))]
pub async fn upload_chunk(
    State(state): State<Arc<AppState>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>> {
    let upload = read_chunk_upload(multipart?).await?;
    let position = upload.position;

    info!(
        "Received chunk {} of {} for file {}",
        position.number(),
        position.total,
        upload.file_name
    );

    let transcription = state.api.transcribe(upload.path()).await?;

    let status = position.status();
    if status == UploadStatus::Complete {
        info!("Upload complete for file {}", upload.file_name);
    }

    Ok(Json(UploadResponse {
        message: status.to_string(),
        transcription,
    }))
}

/// Summarize a transcription submitted as a form field.
#[instrument(skip_all)]
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<SummaryResponse>> {
    let transcription = read_transcription(multipart?).await?;
    let summary = state.api.summarize(&transcription).await?;

    Ok(Json(SummaryResponse {
        message: UploadStatus::Complete.to_string(),
        summary,
    }))
}
