//! Core types for the relay.

mod chunk;
mod config;
mod messages;

pub use chunk::{extension_suffix, ChunkPosition, ChunkUpload, UploadStatus};
pub use config::RelayConfig;
pub use messages::{MessageResponse, SummaryResponse, UploadResponse};
