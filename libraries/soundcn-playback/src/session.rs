//! Playback session - one logical player surface
//!
//! A session plays at most one sound at a time. Starting a new sound stops
//! the previous one first; independent sessions on the same context may play
//! concurrently.
//!
//! # State machine
//!
//! ```text
//! Idle --start--> Loading --loaded--> Playing --natural end / stop--> Idle
//!                    |
//!                    +--failure / stop--> Idle
//! ```
//!
//! Every `start`, `stop`, and `dispose` bumps the session epoch. A load that
//! completes after the epoch moved on is discarded without touching the
//! output, so a stop issued while loading always wins.

use crate::context::{lock, PlaybackContext};
use crate::events::SessionEvent;
use crate::handle::PlaybackHandle;
use crate::loader::AssetLoader;
use crate::types::{PlayOptions, SessionState, VoiceParams};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::{Arc, Mutex, Weak};

/// Clonable handle to one player surface
#[derive(Clone)]
pub struct PlaybackSession {
    shared: Arc<SessionShared>,
}

struct SessionShared {
    context: PlaybackContext,
    loader: Arc<AssetLoader>,
    params: VoiceParams,
    inner: Mutex<SessionInner>,
    subscribers: Mutex<Vec<Sender<SessionEvent>>>,
}

struct SessionInner {
    state: SessionState,
    epoch: u64,
    handle: Option<PlaybackHandle>,
}

impl PlaybackSession {
    /// Create an idle session at full volume and normal speed
    pub fn new(context: PlaybackContext, loader: Arc<AssetLoader>) -> Self {
        Self::with_params(context, loader, VoiceParams::default())
    }

    /// Create an idle session with fixed gain and speed
    pub fn with_params(
        context: PlaybackContext,
        loader: Arc<AssetLoader>,
        params: VoiceParams,
    ) -> Self {
        Self {
            shared: Arc::new(SessionShared {
                context,
                loader,
                params,
                inner: Mutex::new(SessionInner {
                    state: SessionState::Idle,
                    epoch: 0,
                    handle: None,
                }),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        lock(&self.shared.inner).state.clone()
    }

    /// Loading or playing
    pub fn is_active(&self) -> bool {
        lock(&self.shared.inner).state.is_active()
    }

    /// Receive this session's events from now on
    pub fn subscribe(&self) -> Receiver<SessionEvent> {
        let (tx, rx) = unbounded();
        lock(&self.shared.subscribers).push(tx);
        rx
    }

    /// Load and play `name`, replacing whatever this session was doing
    ///
    /// Never fails: resolution and decode errors are logged, published as
    /// `SessionEvent::Failed`, and leave the session idle.
    pub async fn start(&self, name: &str) {
        let epoch = {
            let mut inner = lock(&self.shared.inner);
            if let Some(previous) = inner.handle.take() {
                previous.stop();
            }
            inner.epoch += 1;
            self.transition(
                &mut inner,
                SessionState::Loading {
                    name: name.to_string(),
                },
            );
            inner.epoch
        };

        let loaded = self.shared.loader.load_asset(name).await;

        let mut inner = lock(&self.shared.inner);
        if inner.epoch != epoch {
            tracing::debug!("Discarding stale load of {}", name);
            return;
        }

        let started = loaded.and_then(|asset| {
            let options =
                PlayOptions::new(self.shared.params).with_on_end(self.end_notifier(epoch));
            self.shared.context.play(&asset.data_uri, options)
        });

        match started {
            Ok(handle) => {
                inner.handle = Some(handle);
                self.transition(
                    &mut inner,
                    SessionState::Playing {
                        name: name.to_string(),
                    },
                );
            }
            Err(err) => {
                tracing::warn!("Failed to play sound {}: {}", name, err);
                self.emit(SessionEvent::Failed {
                    name: name.to_string(),
                    message: err.to_string(),
                });
                self.transition(&mut inner, SessionState::Idle);
            }
        }
    }

    /// Stop whatever is loading or playing
    ///
    /// Idempotent; an in-flight load is not cancelled but its result is
    /// discarded.
    pub fn stop(&self) {
        let mut inner = lock(&self.shared.inner);
        inner.epoch += 1;
        if let Some(handle) = inner.handle.take() {
            handle.stop();
        }
        self.transition(&mut inner, SessionState::Idle);
    }

    /// Play/stop control of a sound card
    ///
    /// Stops when `name` is the sound currently loading or playing, otherwise
    /// starts it.
    pub async fn toggle(&self, name: &str) {
        let is_current = lock(&self.shared.inner).state.name() == Some(name);
        if is_current {
            self.stop();
        } else {
            self.start(name).await;
        }
    }

    /// Stop and disconnect every subscriber
    pub fn dispose(&self) {
        self.stop();
        lock(&self.shared.subscribers).clear();
    }

    /// Natural-end callback bound to one epoch
    fn end_notifier(&self, epoch: u64) -> impl FnOnce() + Send + 'static {
        let weak: Weak<SessionShared> = Arc::downgrade(&self.shared);
        move || {
            if let Some(shared) = weak.upgrade() {
                PlaybackSession { shared }.finish(epoch);
            }
        }
    }

    fn finish(&self, epoch: u64) {
        let mut inner = lock(&self.shared.inner);
        if inner.epoch != epoch {
            return;
        }
        let SessionState::Playing { name } = &inner.state else {
            return;
        };
        let name = name.clone();

        inner.handle = None;
        self.emit(SessionEvent::Ended { name });
        self.transition(&mut inner, SessionState::Idle);
    }

    fn transition(&self, inner: &mut SessionInner, state: SessionState) {
        if inner.state == state {
            return;
        }
        tracing::debug!("Session state: {:?} -> {:?}", inner.state, state);
        inner.state = state.clone();
        self.emit(SessionEvent::StateChanged { state });
    }

    fn emit(&self, event: SessionEvent) {
        lock(&self.shared.subscribers).retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl std::fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
