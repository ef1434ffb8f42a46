//! Handle to one started voice

use crate::context::PlaybackContext;
use crate::types::VoiceId;
use std::sync::atomic::{AtomicBool, Ordering};

/// Controls one voice started by `PlaybackContext::play`
///
/// Dropping the handle does not stop the sound.
#[derive(Debug)]
pub struct PlaybackHandle {
    context: PlaybackContext,
    voice: VoiceId,
    stopped: AtomicBool,
}

impl PlaybackHandle {
    pub(crate) fn new(context: PlaybackContext, voice: VoiceId) -> Self {
        Self {
            context,
            voice,
            stopped: AtomicBool::new(false),
        }
    }

    /// Stop immediately
    ///
    /// Idempotent, and safe after the voice has already ended. After `stop`
    /// the voice's `on_end` callback never fires.
    pub fn stop(&self) {
        if !self.stopped.swap(true, Ordering::AcqRel) {
            self.context.stop_voice(self.voice);
        }
    }

    /// Whether the voice is still audible
    pub fn is_playing(&self) -> bool {
        !self.stopped.load(Ordering::Acquire) && self.context.is_voice_active(self.voice)
    }

    /// Voice this handle controls
    pub fn voice_id(&self) -> VoiceId {
        self.voice
    }
}
