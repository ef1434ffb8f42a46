/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sound not found: {0}")]
    NotFound(String),

    #[error("Failed to play {name}: {message}")]
    PlaybackFailed { name: String, message: String },

    #[error(transparent)]
    Catalog(#[from] soundcn_catalog::CatalogError),

    #[error(transparent)]
    Registry(#[from] soundcn_registry::RegistryError),

    #[error(transparent)]
    Playback(#[from] soundcn_playback::PlaybackError),

    #[error(transparent)]
    Audio(#[from] soundcn_audio::AudioError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
