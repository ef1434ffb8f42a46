/// Audio output errors
use thiserror::Error;

/// Result type for audio output operations
pub type Result<T> = std::result::Result<T, OutputError>;

/// Audio output errors
#[derive(Debug, Error)]
pub enum OutputError {
    /// Device not found
    #[error("Audio device not found")]
    DeviceNotFound,

    /// Device error
    #[error("Device error: {0}")]
    DeviceError(String),

    /// Failed to build output stream
    #[error("Failed to build output stream: {0}")]
    StreamBuildError(String),

    /// Failed to play stream
    #[error("Failed to play stream: {0}")]
    PlayError(String),

    /// Audio thread exited or never started
    #[error("Audio thread unavailable: {0}")]
    ThreadError(String),
}

impl From<cpal::BuildStreamError> for OutputError {
    fn from(err: cpal::BuildStreamError) -> Self {
        OutputError::StreamBuildError(err.to_string())
    }
}

impl From<cpal::PlayStreamError> for OutputError {
    fn from(err: cpal::PlayStreamError) -> Self {
        OutputError::PlayError(err.to_string())
    }
}

impl From<cpal::DefaultStreamConfigError> for OutputError {
    fn from(err: cpal::DefaultStreamConfigError) -> Self {
        OutputError::DeviceError(err.to_string())
    }
}

impl From<OutputError> for soundcn_playback::PlaybackError {
    fn from(err: OutputError) -> Self {
        soundcn_playback::PlaybackError::Output(err.to_string())
    }
}

impl From<OutputError> for soundcn_core::SoundError {
    fn from(err: OutputError) -> Self {
        soundcn_core::SoundError::audio(err.to_string())
    }
}
