//! soundcn Audio
//!
//! Turns the embedded payload of a sound module into PCM:
//!
//! - Data URI parsing and base64 decoding
//! - Payload decoding via Symphonia (MP3, WAV, OGG/Vorbis)
//!
//! # Example
//!
//! ```rust,no_run
//! use soundcn_audio::SymphoniaDecoder;
//! use soundcn_core::SoundAsset;
//!
//! # fn example(asset: &SoundAsset) -> soundcn_core::Result<()> {
//! let buffer = SymphoniaDecoder::new().decode_asset(asset)?;
//! println!(
//!     "Decoded {:.2}s at {} Hz",
//!     buffer.duration_secs(),
//!     buffer.format.sample_rate.as_hz()
//! );
//! # Ok(())
//! # }
//! ```

pub mod data_uri;
mod decoder;
mod error;

pub use data_uri::{encode_data_uri, DataUri};
pub use decoder::SymphoniaDecoder;
pub use error::{AudioError, Result};
