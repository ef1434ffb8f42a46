//! Platform-agnostic audio output trait
//!
//! The shared playback context drives exactly one output. Desktop builds plug
//! in a cpal-backed mixer; tests plug in a scripted fake.

use crate::error::Result;
use crate::types::{OutputState, VoiceId, VoiceParams};
use soundcn_core::AudioBuffer;
use std::sync::Arc;

/// A device that can play several decoded buffers at once
///
/// Each `start` creates a fresh one-shot voice. Voices never restart; a
/// finished or stopped voice id is never reused.
pub trait AudioOutput: Send {
    /// Current run state
    fn state(&self) -> OutputState;

    /// Bring a suspended output back to `Running`
    ///
    /// No-op when already running.
    fn resume(&mut self) -> Result<()>;

    /// Start a new voice immediately
    fn start(&mut self, buffer: Arc<AudioBuffer>, params: VoiceParams) -> Result<VoiceId>;

    /// Silence a voice
    ///
    /// Must tolerate ids that already finished, were already stopped, or were
    /// never issued. A stopped voice is never reported by `drain_finished`.
    fn stop(&mut self, voice: VoiceId);

    /// Voices that reached their natural end since the last call
    fn drain_finished(&mut self) -> Vec<VoiceId>;
}
