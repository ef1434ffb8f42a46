//! Subcommand implementations
//!
//! Text-producing commands return the rendered output so `main` decides
//! where it goes; side-effecting commands (play, download, update-registry)
//! perform their work and return a summary.

pub mod browse;
pub mod download;
pub mod play;
pub mod registry;

use crate::config::AppConfig;
use crate::error::Result;
use soundcn_catalog::Catalog;

/// Load the catalog named by the configuration
pub fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    Ok(Catalog::from_path(&config.catalog.manifest_path)?)
}
