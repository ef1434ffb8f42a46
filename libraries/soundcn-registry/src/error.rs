//! Error types for registry maintenance

use std::path::PathBuf;
use thiserror::Error;

/// Registry errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Sounds directory not found: {}", .0.display())]
    SoundsDirNotFound(PathBuf),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Invalid sound module {slug}: {reason}")]
    InvalidModule { slug: String, reason: String },
}

impl From<RegistryError> for soundcn_core::SoundError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Io(e) => soundcn_core::SoundError::Io(e),
            RegistryError::Json(e) => soundcn_core::SoundError::Serialization(e),
            RegistryError::SoundsDirNotFound(path) => {
                soundcn_core::SoundError::not_found("Sounds directory", path.display().to_string())
            }
            other => soundcn_core::SoundError::Other(other.to_string()),
        }
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
