//! soundcn Core
//!
//! Platform-agnostic core types, traits, and error handling for soundcn.
//!
//! This crate provides the foundational building blocks shared by the catalog,
//! decoding, playback, and registry crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `CatalogEntry`, `BroadCategory`, `SoundAsset`, the raw manifest shape
//! - **Core Traits**: `AudioDecoder`
//! - **Error Handling**: Unified `SoundError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use soundcn_core::types::BroadCategory;
//!
//! assert_eq!(BroadCategory::from_primary("click"), BroadCategory::Ui);
//! assert_eq!(BroadCategory::from_primary("kazoo"), BroadCategory::Other);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SoundError};
pub use traits::AudioDecoder;

pub use types::{
    // Audio types
    AudioBuffer, AudioFormat, SampleRate,
    // Catalog
    BroadCategory, CatalogEntry, EntryMeta,
    // Assets
    AssetFormat, SoundAsset,
    // Manifest
    RawItem, RawManifest, RawMeta, BLOCK_ITEM_TYPE,
};
