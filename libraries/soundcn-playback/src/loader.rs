//! Lazy sound asset resolution
//!
//! Payloads are too large to ship with the catalog, so each sound's asset is
//! resolved on first use through an `AssetSource` and memoized per slug for
//! the process lifetime. Concurrent loads of one slug share a single
//! resolution; failed resolutions are not cached.

use crate::context::lock;
use crate::error::{PlaybackError, Result};
use async_trait::async_trait;
use soundcn_core::SoundAsset;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;

/// Resolves a slug to its asset
///
/// Implementations must return `PlaybackError::AssetNotFound` when no
/// module exists for the slug.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetch the asset for `name`
    async fn fetch(&self, name: &str) -> Result<SoundAsset>;
}

/// In-memory asset table
#[derive(Debug, Clone, Default)]
pub struct StaticAssetSource {
    assets: HashMap<String, SoundAsset>,
}

impl StaticAssetSource {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an asset, keyed by its name
    pub fn insert(&mut self, asset: SoundAsset) {
        self.assets.insert(asset.name.clone(), asset);
    }
}

impl FromIterator<SoundAsset> for StaticAssetSource {
    fn from_iter<I: IntoIterator<Item = SoundAsset>>(iter: I) -> Self {
        let mut source = Self::new();
        for asset in iter {
            source.insert(asset);
        }
        source
    }
}

#[async_trait]
impl AssetSource for StaticAssetSource {
    async fn fetch(&self, name: &str) -> Result<SoundAsset> {
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| PlaybackError::AssetNotFound(name.to_string()))
    }
}

/// Resolution slot shared by concurrent loads of one name
type AssetCell = Arc<OnceCell<Arc<SoundAsset>>>;

/// Memoizing front of an `AssetSource`
pub struct AssetLoader {
    source: Arc<dyn AssetSource>,
    cells: Mutex<HashMap<String, AssetCell>>,
    fetches: AtomicUsize,
}

impl AssetLoader {
    /// Wrap a source
    pub fn new(source: Arc<dyn AssetSource>) -> Self {
        Self {
            source,
            cells: Mutex::new(HashMap::new()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Resolve a sound's asset
    ///
    /// The second and later calls for the same name return the memoized
    /// asset without touching the source.
    pub async fn load_asset(&self, name: &str) -> Result<Arc<SoundAsset>> {
        let cell = {
            let mut cells = lock(&self.cells);
            Arc::clone(cells.entry(name.to_string()).or_default())
        };

        let asset = cell
            .get_or_try_init(|| async {
                self.fetches.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Resolving sound asset: {}", name);
                self.source.fetch(name).await.map(Arc::new)
            })
            .await?;

        Ok(Arc::clone(asset))
    }

    /// Whether a resolved asset is memoized for `name`
    pub fn is_cached(&self, name: &str) -> bool {
        lock(&self.cells)
            .get(name)
            .is_some_and(|cell| cell.initialized())
    }

    /// Number of times the underlying source was called
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for AssetLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetLoader")
            .field("fetch_count", &self.fetch_count())
            .finish_non_exhaustive()
    }
}
