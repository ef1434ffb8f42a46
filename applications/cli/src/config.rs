/// Application configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use soundcn_catalog::{PackageManager, DEFAULT_RELATED_LIMIT};
use soundcn_playback::VoiceParams;
use std::path::{Path, PathBuf};

/// Config file read from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "soundcn.toml";

/// Prefix of environment overrides (`SOUNDCN_PLAYBACK__VOLUME=0.5`)
pub const ENV_PREFIX: &str = "SOUNDCN";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub install: InstallSettings,

    #[serde(default)]
    pub playback: PlaybackSettings,

    #[serde(default)]
    pub related: RelatedSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,

    #[serde(default = "default_sounds_dir")]
    pub sounds_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstallSettings {
    #[serde(default = "default_package_manager")]
    pub package_manager: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_volume")]
    pub volume: f32,

    #[serde(default = "default_playback_rate")]
    pub playback_rate: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelatedSettings {
    #[serde(default = "default_related_limit")]
    pub limit: usize,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `soundcn.toml` is used when
    /// present. `SOUNDCN_<SECTION>__<KEY>` variables override both.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.package_manager()?;
        self.voice_params()?;
        Ok(())
    }

    /// Configured package manager for install commands
    pub fn package_manager(&self) -> Result<PackageManager> {
        self.install
            .package_manager
            .parse()
            .map_err(|e: soundcn_catalog::CatalogError| CliError::Config(e.to_string()))
    }

    /// Default gain and rate for previews
    pub fn voice_params(&self) -> Result<VoiceParams> {
        VoiceParams::new(self.playback.volume, self.playback.playback_rate)
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

// Default values
impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            sounds_dir: default_sounds_dir(),
        }
    }
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self {
            package_manager: default_package_manager(),
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            playback_rate: default_playback_rate(),
        }
    }
}

impl Default for RelatedSettings {
    fn default() -> Self {
        Self {
            limit: default_related_limit(),
        }
    }
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("registry.json")
}

fn default_sounds_dir() -> PathBuf {
    PathBuf::from("registry/new-york/sounds")
}

fn default_package_manager() -> String {
    PackageManager::default().as_str().to_string()
}

fn default_volume() -> f32 {
    1.0
}

fn default_playback_rate() -> f32 {
    1.0
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}
