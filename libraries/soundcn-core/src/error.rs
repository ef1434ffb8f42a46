/// Core error types for soundcn
use thiserror::Error;

/// Result type alias using `SoundError`
pub type Result<T> = std::result::Result<T, SoundError>;

/// Core error type for soundcn
#[derive(Error, Debug)]
pub enum SoundError {
    /// Entity not found (sound module, catalog entry, ...)
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Payload could not be decoded as audio
    #[error("Decode error: {0}")]
    Decode(String),

    /// Audio output errors
    #[error("Audio error: {0}")]
    Audio(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl SoundError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error means the requested thing does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
