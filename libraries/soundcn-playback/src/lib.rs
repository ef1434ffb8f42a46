//! soundcn - Playback
//!
//! Platform-agnostic preview playback for catalog sounds.
//!
//! This crate provides:
//! - A process-wide `PlaybackContext` (lazy output, content-addressed decode cache)
//! - One-shot voices with gain, playback rate, and natural-end callbacks
//! - Lazy, memoized asset resolution (`AssetLoader` over an `AssetSource`)
//! - `PlaybackSession`: per-surface idle/loading/playing state machine with
//!   at-most-one-active arbitration and stop-during-load safety
//!
//! # Architecture
//!
//! No dependency on any audio backend: the device is provided through the
//! `AudioOutput` trait (the desktop crate implements it with cpal). Natural
//! ends are reported by the output and delivered on the caller's thread by
//! `PlaybackContext::pump`, never from the real-time callback.
//!
//! # Example
//!
//! ```rust,no_run
//! use soundcn_playback::{
//!     AssetLoader, AudioOutput, PlaybackContext, PlaybackSession, StaticAssetSource,
//! };
//! use std::sync::Arc;
//!
//! # fn open_device() -> soundcn_playback::Result<Box<dyn AudioOutput>> { unimplemented!() }
//! # async fn example() {
//! let context = PlaybackContext::new(open_device);
//! let loader = Arc::new(AssetLoader::new(Arc::new(StaticAssetSource::new())));
//! let session = PlaybackSession::new(context.clone(), loader);
//!
//! session.toggle("click-soft").await;
//! // Drive natural-end delivery from the UI loop
//! context.pump();
//! # }
//! ```

mod context;
mod error;
pub mod events;
mod handle;
mod loader;
mod output;
mod session;
pub mod types;

// Public exports
pub use context::{OutputFactory, PlaybackContext};
pub use error::{PlaybackError, Result};
pub use events::SessionEvent;
pub use handle::PlaybackHandle;
pub use loader::{AssetLoader, AssetSource, StaticAssetSource};
pub use output::AudioOutput;
pub use session::PlaybackSession;
pub use types::{EndCallback, OutputState, PlayOptions, SessionState, VoiceId, VoiceParams};
