//! Chunk types.

use std::fmt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Position of an uploaded chunk within the client's file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPosition {
    /// Zero-based chunk index
    pub index: u32,
    /// Total number of chunks the client will send
    pub total: u32,
}

impl ChunkPosition {
    /// Create a position. The index is not checked against the total: only
    /// `index + 1 == total` marks the final chunk.
    pub fn new(index: u32, total: u32) -> Self {
        Self { index, total }
    }

    /// One-based number of this chunk.
    pub fn number(&self) -> u64 {
        u64::from(self.index) + 1
    }

    /// Whether this is the final chunk of the file.
    pub fn is_last(&self) -> bool {
        self.number() == u64::from(self.total)
    }

    /// Upload status to report once this chunk is transcribed.
    pub fn status(&self) -> UploadStatus {
        if self.is_last() {
            UploadStatus::Complete
        } else {
            UploadStatus::InProgress {
                received: self.number(),
            }
        }
    }
}

/// Status reported back to the uploader after each chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    /// The final chunk was received
    Complete,
    /// More chunks are expected; `received` is the one-based chunk number
    InProgress { received: u64 },
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStatus::Complete => write!(f, "File upload complete"),
            UploadStatus::InProgress { received } => write!(f, "Chunk {} received", received),
        }
    }
}

/// A single uploaded chunk staged on local disk.
///
/// The chunk lives in its own temporary directory, which is removed together
/// with the file when the upload is dropped.
#[derive(Debug)]
pub struct ChunkUpload {
    /// Original name of the file the chunk belongs to
    pub file_name: String,
    /// Position of the chunk in the file
    pub position: ChunkPosition,
    path: PathBuf,
    _dir: TempDir,
}

impl ChunkUpload {
    pub(crate) fn new(file_name: String, position: ChunkPosition, path: PathBuf, dir: TempDir) -> Self {
        Self {
            file_name,
            position,
            path,
            _dir: dir,
        }
    }

    /// Path of the staged chunk file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Extension of `file_name` including the leading dot, or an empty string.
///
/// Dot-files such as `.bashrc` have no extension.
pub fn extension_suffix(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}
