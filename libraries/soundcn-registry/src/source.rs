//! Asset source backed by sound modules on disk

use crate::module::SoundModule;
use crate::scanner::ModuleIndex;
use async_trait::async_trait;
use soundcn_core::SoundAsset;
use soundcn_playback::{AssetSource, PlaybackError};
use std::path::Path;

/// Resolves slugs through a `ModuleIndex` and parses the module file
///
/// Lookup is by slug only: a slug absent from the index is `AssetNotFound`
/// even if a file with that name appears later.
#[derive(Debug, Clone)]
pub struct DirectoryAssetSource {
    index: ModuleIndex,
}

impl DirectoryAssetSource {
    pub fn new(index: ModuleIndex) -> Self {
        Self { index }
    }

    /// Scan `root` and build a source over it
    pub fn scan(root: &Path) -> crate::Result<Self> {
        Ok(Self::new(ModuleIndex::scan(root)?))
    }

    pub fn index(&self) -> &ModuleIndex {
        &self.index
    }
}

#[async_trait]
impl AssetSource for DirectoryAssetSource {
    async fn fetch(&self, name: &str) -> soundcn_playback::Result<SoundAsset> {
        let path = self
            .index
            .get(name)
            .ok_or_else(|| PlaybackError::AssetNotFound(name.to_string()))?;

        let source_error = |message: String| PlaybackError::AssetSource {
            name: name.to_string(),
            message,
        };

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| source_error(format!("{}: {}", path.display(), e)))?;

        let asset = SoundModule::parse(&text)
            .into_asset(name)
            .map_err(|e| source_error(e.to_string()))?;

        tracing::debug!("Resolved sound module {} ({})", name, asset.format);
        Ok(asset)
    }
}
