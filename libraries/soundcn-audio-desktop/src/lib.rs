//! soundcn - Desktop Audio
//!
//! Desktop implementation of the shared playback output:
//! - `CpalOutput`: default-device stream on a dedicated audio thread
//! - `Mixer`: any number of one-shot voices with gain, playback rate, and
//!   sample-rate conversion by linear interpolation
//!
//! # Example
//!
//! ```rust,no_run
//! use soundcn_audio_desktop::CpalOutput;
//! use soundcn_playback::PlaybackContext;
//!
//! // The device is opened on the first `play`, not here
//! let context = PlaybackContext::new(CpalOutput::open_default);
//! assert!(!context.is_initialized());
//! ```

mod error;
pub mod mixer;
mod output;

pub use error::{OutputError, Result};
pub use mixer::{Mixer, MixerCommand};
pub use output::CpalOutput;
