//! Session Events
//!
//! Event-based communication so a surface can render its play control
//! without polling. Events are emitted at:
//! - State changes (idle/loading/playing)
//! - Natural end of a sound (before the state returns to idle)
//! - Load or decode failures

use crate::types::SessionState;
use serde::{Deserialize, Serialize};

/// Events emitted by a playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Session state changed
    StateChanged {
        /// The new state
        state: SessionState,
    },

    /// Sound played to its natural end
    Ended {
        /// Slug of the finished sound
        name: String,
    },

    /// Resolution, decoding, or output failed; the session went idle
    Failed {
        /// Slug that failed
        name: String,
        /// Error message
        message: String,
    },
}
