//! Domain types for soundcn

pub mod asset;
pub mod audio;
pub mod category;
pub mod entry;
pub mod manifest;

pub use asset::{AssetFormat, SoundAsset};
pub use audio::{AudioBuffer, AudioFormat, SampleRate};
pub use category::BroadCategory;
pub use entry::{CatalogEntry, EntryMeta};
pub use manifest::{RawItem, RawManifest, RawMeta, BLOCK_ITEM_TYPE};
