//! Error types for playback

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No sound module exists for the slug
    #[error("Sound not found: {0}")]
    AssetNotFound(String),

    /// The asset source failed for a reason other than absence
    #[error("Failed to resolve sound {name}: {message}")]
    AssetSource {
        /// Slug being resolved
        name: String,
        /// Source-specific description
        message: String,
    },

    /// Payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Output device or stream error
    #[error("Audio output error: {0}")]
    Output(String),

    /// Invalid playback parameter
    #[error("Invalid playback option: {0}")]
    InvalidOption(String),
}

impl PlaybackError {
    /// Whether the error means the sound does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AssetNotFound(_))
    }
}

impl From<soundcn_core::SoundError> for PlaybackError {
    fn from(err: soundcn_core::SoundError) -> Self {
        match err {
            soundcn_core::SoundError::NotFound { id, .. } => PlaybackError::AssetNotFound(id),
            soundcn_core::SoundError::Decode(msg) => PlaybackError::Decode(msg),
            soundcn_core::SoundError::Audio(msg) => PlaybackError::Output(msg),
            other => PlaybackError::Decode(other.to_string()),
        }
    }
}

impl From<soundcn_audio::AudioError> for PlaybackError {
    fn from(err: soundcn_audio::AudioError) -> Self {
        PlaybackError::Decode(err.to_string())
    }
}

impl From<PlaybackError> for soundcn_core::SoundError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::AssetNotFound(name) => soundcn_core::SoundError::not_found("Sound", name),
            PlaybackError::Decode(msg) => soundcn_core::SoundError::decode(msg),
            other => soundcn_core::SoundError::audio(other.to_string()),
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
