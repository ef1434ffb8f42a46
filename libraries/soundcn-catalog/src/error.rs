//! Error types for the catalog

use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Manifest file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest is not valid JSON (or not an object with an `items` array)
    #[error("Invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Category key is neither `all` nor a known broad category label
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Package manager outside the supported set
    #[error("Unsupported package manager: {0} (expected one of npm, pnpm, yarn, bun)")]
    UnknownPackageManager(String),

    /// Install command requested for zero sounds
    #[error("No sounds selected")]
    EmptySelection,
}

impl From<CatalogError> for soundcn_core::SoundError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Io(e) => soundcn_core::SoundError::Io(e),
            CatalogError::Manifest(e) => soundcn_core::SoundError::Serialization(e),
            other => soundcn_core::SoundError::invalid_input(other.to_string()),
        }
    }
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
