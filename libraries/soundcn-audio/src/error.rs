/// Decoding errors
use thiserror::Error;

/// Result type alias using `AudioError`
pub type Result<T> = std::result::Result<T, AudioError>;

/// Audio error types
#[derive(Error, Debug)]
pub enum AudioError {
    /// Data URI is not `data:<mime>;base64,<payload>`
    #[error("Malformed data URI: {0}")]
    MalformedDataUri(String),

    /// Base64 payload could not be decoded
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoding error
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Symphonia error
    #[error("Symphonia error: {0}")]
    Symphonia(String),
}

impl From<AudioError> for soundcn_core::SoundError {
    fn from(err: AudioError) -> Self {
        soundcn_core::SoundError::decode(err.to_string())
    }
}
