//! Core types for playback

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Callback fired once when a voice reaches its natural end
pub type EndCallback = Box<dyn FnOnce() + Send + 'static>;

/// Identifier of one voice on the shared output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoiceId(pub u64);

impl fmt::Display for VoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "voice-{}", self.0)
    }
}

/// Gain and speed of one voice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceParams {
    /// Linear gain, 0.0 - 1.0
    pub volume: f32,

    /// Speed multiplier (1.0 = original pitch and speed)
    pub playback_rate: f32,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            volume: 1.0,
            playback_rate: 1.0,
        }
    }
}

impl VoiceParams {
    /// Create validated voice parameters
    pub fn new(volume: f32, playback_rate: f32) -> Result<Self> {
        let params = Self {
            volume,
            playback_rate,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check ranges: volume in [0, 1], rate finite and positive
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(PlaybackError::InvalidOption(format!(
                "volume must be between 0.0 and 1.0, got {}",
                self.volume
            )));
        }
        if !self.playback_rate.is_finite() || self.playback_rate <= 0.0 {
            return Err(PlaybackError::InvalidOption(format!(
                "playback rate must be positive, got {}",
                self.playback_rate
            )));
        }
        Ok(())
    }
}

/// Options for a single `play` call
#[derive(Default)]
pub struct PlayOptions {
    /// Gain and speed
    pub params: VoiceParams,

    /// Fired exactly once on natural end, never after an explicit stop
    pub on_end: Option<EndCallback>,
}

impl PlayOptions {
    /// Options with the given gain and speed
    pub fn new(params: VoiceParams) -> Self {
        Self {
            params,
            on_end: None,
        }
    }

    /// Attach a natural-end callback
    #[must_use]
    pub fn with_on_end(mut self, on_end: impl FnOnce() + Send + 'static) -> Self {
        self.on_end = Some(Box::new(on_end));
        self
    }
}

impl fmt::Debug for PlayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayOptions")
            .field("params", &self.params)
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

/// Run state of the shared output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputState {
    /// Rendering audio
    Running,

    /// Created but not rendering (e.g. device paused); must be resumed
    Suspended,
}

/// State of one playback surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Nothing loading or playing
    Idle,

    /// Resolving and decoding the named sound
    Loading {
        /// Slug being loaded
        name: String,
    },

    /// The named sound is audible
    Playing {
        /// Slug playing
        name: String,
    },
}

impl SessionState {
    /// Slug of the loading or playing sound
    pub fn name(&self) -> Option<&str> {
        match self {
            SessionState::Idle => None,
            SessionState::Loading { name } | SessionState::Playing { name } => Some(name),
        }
    }

    /// Loading or playing
    pub fn is_active(&self) -> bool {
        !matches!(self, SessionState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_params_validation() {
        assert!(VoiceParams::new(0.5, 1.0).is_ok());
        assert!(VoiceParams::new(0.0, 0.25).is_ok());
        assert!(VoiceParams::new(1.5, 1.0).is_err());
        assert!(VoiceParams::new(-0.1, 1.0).is_err());
        assert!(VoiceParams::new(1.0, 0.0).is_err());
        assert!(VoiceParams::new(1.0, f32::NAN).is_err());
    }

    #[test]
    fn session_state_name() {
        assert_eq!(SessionState::Idle.name(), None);
        let loading = SessionState::Loading {
            name: "click".to_string(),
        };
        assert_eq!(loading.name(), Some("click"));
        assert!(loading.is_active());
        assert!(!SessionState::Idle.is_active());
    }

    #[test]
    fn play_options_debug_hides_callback() {
        let options = PlayOptions::default().with_on_end(|| {});
        assert!(format!("{options:?}").contains("on_end: true"));
    }
}
