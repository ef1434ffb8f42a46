//! Write a sound's decoded payload to disk

use crate::error::Result;
use soundcn_audio::DataUri;
use soundcn_playback::AssetSource;
use soundcn_registry::DirectoryAssetSource;
use std::path::{Path, PathBuf};

/// Resolve `name` through `source` and save it as `<out_dir>/<name>.<format>`
pub async fn download(source: &DirectoryAssetSource, name: &str, out_dir: &Path) -> Result<PathBuf> {
    let asset = source.fetch(name).await?;
    let bytes = DataUri::parse(&asset.data_uri)?.decode()?;

    tokio::fs::create_dir_all(out_dir).await?;
    let path = out_dir.join(asset.file_name());
    tokio::fs::write(&path, &bytes).await?;

    tracing::info!(
        "Downloaded {} ({} bytes) to {}",
        name,
        bytes.len(),
        path.display()
    );
    Ok(path)
}
