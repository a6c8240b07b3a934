//! Multipart form parsing for the upload and summary endpoints.

use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{RelayError, Result};
use crate::types::{extension_suffix, ChunkPosition, ChunkUpload};

/// Name of the file field carrying the audio chunk.
pub const CHUNK_FIELD: &str = "chunk";
pub const CHUNK_INDEX_FIELD: &str = "chunkIndex";
pub const TOTAL_CHUNKS_FIELD: &str = "totalChunks";
pub const FILE_NAME_FIELD: &str = "fileName";
pub const TRANSCRIPTION_FIELD: &str = "transcription";

impl From<MultipartError> for RelayError {
    fn from(err: MultipartError) -> Self {
        RelayError::Parse(err.body_text())
    }
}

impl From<MultipartRejection> for RelayError {
    fn from(err: MultipartRejection) -> Self {
        RelayError::Parse(err.body_text())
    }
}

fn missing(field: &str) -> RelayError {
    RelayError::Parse(format!("missing field `{}`", field))
}

fn parse_count(field: &str, value: &str) -> Result<u32> {
    value.trim().parse().map_err(|_| {
        RelayError::Parse(format!("field `{}` is not a valid integer: {:?}", field, value))
    })
}

/// Read a chunk upload, streaming the file field into a fresh temporary
/// directory.
///
/// The staged file is renamed to carry the extension of `fileName` so the
/// transcription API can infer the audio format.
pub async fn read_chunk_upload(mut multipart: Multipart) -> Result<ChunkUpload> {
    let dir = tempfile::Builder::new().prefix("relay-chunk-").tempdir()?;
    let staged = dir.path().join("chunk");

    let mut received_chunk = false;
    let mut chunk_index = None;
    let mut total_chunks = None;
    let mut file_name = None;

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            CHUNK_FIELD => {
                let mut file = File::create(&staged).await?;
                let mut written = 0usize;
                while let Some(bytes) = field.chunk().await? {
                    written += bytes.len();
                    file.write_all(&bytes).await?;
                }
                file.flush().await?;
                debug!(bytes = written, "Chunk staged");
                received_chunk = true;
            }
            CHUNK_INDEX_FIELD => chunk_index = Some(field.text().await?),
            TOTAL_CHUNKS_FIELD => total_chunks = Some(field.text().await?),
            FILE_NAME_FIELD => file_name = Some(field.text().await?),
            other => debug!(field = other, "Ignoring unexpected form field"),
        }
    }

    if !received_chunk {
        return Err(missing(CHUNK_FIELD));
    }
    let chunk_index = chunk_index.ok_or_else(|| missing(CHUNK_INDEX_FIELD))?;
    let total_chunks = total_chunks.ok_or_else(|| missing(TOTAL_CHUNKS_FIELD))?;
    let file_name = file_name.ok_or_else(|| missing(FILE_NAME_FIELD))?;

    let position = ChunkPosition::new(
        parse_count(CHUNK_INDEX_FIELD, &chunk_index)?,
        parse_count(TOTAL_CHUNKS_FIELD, &total_chunks)?,
    );

    let path = dir
        .path()
        .join(format!("chunk{}", extension_suffix(&file_name)));
    tokio::fs::rename(&staged, &path).await?;

    Ok(ChunkUpload::new(file_name, position, path, dir))
}

/// Read the `transcription` text field of a summary request.
pub async fn read_transcription(mut multipart: Multipart) -> Result<String> {
    let mut transcription = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(TRANSCRIPTION_FIELD) {
            transcription = Some(field.text().await?);
        }
    }

    transcription.ok_or_else(|| missing(TRANSCRIPTION_FIELD))
}
