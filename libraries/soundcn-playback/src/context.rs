//! Shared playback context
//!
//! One per process, passed around by handle (cheap `Clone`). Owns:
//! - the lazily created audio output (resumed before every start if suspended)
//! - the decoded-buffer cache, keyed by SHA-256 of the data URI, insert-once
//! - the natural-end callbacks of live voices, fired from `pump()`

use crate::error::{PlaybackError, Result};
use crate::handle::PlaybackHandle;
use crate::output::AudioOutput;
use crate::types::{EndCallback, OutputState, PlayOptions, VoiceId};
use sha2::{Digest, Sha256};
use soundcn_audio::{DataUri, SymphoniaDecoder};
use soundcn_core::{AudioBuffer, AudioDecoder};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Creates the output on first use
pub type OutputFactory = Box<dyn Fn() -> Result<Box<dyn AudioOutput>> + Send + Sync>;

/// Process-wide playback context
#[derive(Clone)]
pub struct PlaybackContext {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    factory: OutputFactory,
    decoder: Arc<dyn AudioDecoder>,
    output: Mutex<Option<Box<dyn AudioOutput>>>,
    buffers: Mutex<HashMap<String, Arc<AudioBuffer>>>,
    /// Live voices and their pending natural-end callbacks
    voices: Mutex<HashMap<VoiceId, Option<EndCallback>>>,
    decodes: AtomicUsize,
}

impl PlaybackContext {
    /// Create a context decoding with Symphonia
    ///
    /// `factory` is not called until the first `play`.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn AudioOutput>> + Send + Sync + 'static,
    {
        Self::with_decoder(factory, Arc::new(SymphoniaDecoder::new()))
    }

    /// Create a context with a custom decoder
    pub fn with_decoder<F>(factory: F, decoder: Arc<dyn AudioDecoder>) -> Self
    where
        F: Fn() -> Result<Box<dyn AudioOutput>> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(ContextInner {
                factory: Box::new(factory),
                decoder,
                output: Mutex::new(None),
                buffers: Mutex::new(HashMap::new()),
                voices: Mutex::new(HashMap::new()),
                decodes: AtomicUsize::new(0),
            }),
        }
    }

    /// Whether the output has been created yet
    pub fn is_initialized(&self) -> bool {
        lock(&self.inner.output).is_some()
    }

    /// Decode a data URI, reusing the cached buffer for identical payloads
    pub fn decode(&self, data_uri: &str) -> Result<Arc<AudioBuffer>> {
        let key = cache_key(data_uri);

        if let Some(buffer) = lock(&self.inner.buffers).get(&key) {
            tracing::debug!("Decoded buffer cache hit ({})", &key[..12]);
            return Ok(Arc::clone(buffer));
        }

        let uri = DataUri::parse(data_uri)?;
        let bytes = uri.decode()?;
        let buffer = Arc::new(self.inner.decoder.decode(&bytes, uri.format())?);
        self.inner.decodes.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(
            "Decoded {:.2}s payload ({} frames at {} Hz)",
            buffer.duration_secs(),
            buffer.frames(),
            buffer.format.sample_rate.as_hz()
        );

        // Insert-once: a concurrent decode of the same payload keeps the first
        let mut buffers = lock(&self.inner.buffers);
        Ok(Arc::clone(buffers.entry(key).or_insert(buffer)))
    }

    /// Play a payload on a fresh voice
    ///
    /// Creates the output on first use and resumes it if suspended. The
    /// returned handle stops this voice only.
    pub fn play(&self, data_uri: &str, options: PlayOptions) -> Result<PlaybackHandle> {
        options.params.validate()?;
        let buffer = self.decode(data_uri)?;

        let mut output_guard = lock(&self.inner.output);
        if output_guard.is_none() {
            tracing::debug!("Creating shared audio output");
            *output_guard = Some((self.inner.factory)()?);
        }
        let output = output_guard
            .as_mut()
            .ok_or_else(|| PlaybackError::Output("audio output unavailable".to_string()))?;

        if output.state() == OutputState::Suspended {
            tracing::debug!("Resuming suspended audio output");
            output.resume()?;
        }

        let voice = output.start(buffer, options.params)?;

        // Registered before the output lock is released so `pump` cannot
        // observe the voice finishing before its callback exists
        lock(&self.inner.voices).insert(voice, options.on_end);
        drop(output_guard);

        Ok(PlaybackHandle::new(self.clone(), voice))
    }

    /// Deliver natural-end notifications
    ///
    /// Drains finished voices from the output and fires each pending
    /// callback exactly once, outside every internal lock. Returns the number
    /// of voices that ended.
    pub fn pump(&self) -> usize {
        let finished = match lock(&self.inner.output).as_mut() {
            Some(output) => output.drain_finished(),
            None => return 0,
        };
        if finished.is_empty() {
            return 0;
        }

        let callbacks: Vec<EndCallback> = {
            let mut voices = lock(&self.inner.voices);
            finished
                .iter()
                .filter_map(|voice| voices.remove(voice))
                .flatten()
                .collect()
        };

        for callback in callbacks {
            callback();
        }
        finished.len()
    }

    /// Number of voices started and not yet ended or stopped
    pub fn active_voices(&self) -> usize {
        lock(&self.inner.voices).len()
    }

    /// Number of distinct decoded payloads held
    pub fn cached_buffers(&self) -> usize {
        lock(&self.inner.buffers).len()
    }

    /// Number of decodes actually performed
    pub fn decode_count(&self) -> usize {
        self.inner.decodes.load(Ordering::Relaxed)
    }

    pub(crate) fn is_voice_active(&self, voice: VoiceId) -> bool {
        lock(&self.inner.voices).contains_key(&voice)
    }

    /// Drop the voice's callback, then silence it
    pub(crate) fn stop_voice(&self, voice: VoiceId) {
        let was_live = lock(&self.inner.voices).remove(&voice).is_some();
        if let Some(output) = lock(&self.inner.output).as_mut() {
            output.stop(voice);
        }
        if was_live {
            tracing::debug!("Stopped {}", voice);
        }
    }
}

impl std::fmt::Debug for PlaybackContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackContext")
            .field("initialized", &self.is_initialized())
            .field("cached_buffers", &self.cached_buffers())
            .field("active_voices", &self.active_voices())
            .finish()
    }
}

/// Content address of a payload
fn cache_key(data_uri: &str) -> String {
    hex::encode(Sha256::digest(data_uri.as_bytes()))
}

/// Lock ignoring poisoning; every guarded value stays consistent across panics
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VoiceParams;
    use soundcn_core::{AssetFormat, AudioFormat, SampleRate};

    /// Returns a fixed buffer for any payload
    struct FixedDecoder;

    impl AudioDecoder for FixedDecoder {
        fn decode(
            &self,
            _bytes: &[u8],
            _hint: Option<AssetFormat>,
        ) -> soundcn_core::Result<AudioBuffer> {
            Ok(AudioBuffer::new(
                vec![0.0; 64],
                AudioFormat::stereo(SampleRate::CD_QUALITY),
            ))
        }

        fn supports_format(&self, _format: AssetFormat) -> bool {
            true
        }
    }

    #[derive(Default)]
    struct Shared {
        next: u64,
        started: Vec<VoiceId>,
        stopped: Vec<VoiceId>,
        finished: Vec<VoiceId>,
        suspended: bool,
        resumes: usize,
    }

    #[derive(Clone, Default)]
    struct FakeOutput(Arc<Mutex<Shared>>);

    impl AudioOutput for FakeOutput {
        fn state(&self) -> OutputState {
            if self.0.lock().unwrap().suspended {
                OutputState::Suspended
            } else {
                OutputState::Running
            }
        }

        fn resume(&mut self) -> Result<()> {
            let mut shared = self.0.lock().unwrap();
            shared.suspended = false;
            shared.resumes += 1;
            Ok(())
        }

        fn start(&mut self, _buffer: Arc<AudioBuffer>, _params: VoiceParams) -> Result<VoiceId> {
            let mut shared = self.0.lock().unwrap();
            shared.next += 1;
            let voice = VoiceId(shared.next);
            shared.started.push(voice);
            Ok(voice)
        }

        fn stop(&mut self, voice: VoiceId) {
            self.0.lock().unwrap().stopped.push(voice);
        }

        fn drain_finished(&mut self) -> Vec<VoiceId> {
            std::mem::take(&mut self.0.lock().unwrap().finished)
        }
    }

    fn context(fake: &FakeOutput) -> PlaybackContext {
        let fake = fake.clone();
        PlaybackContext::with_decoder(
            move || Ok(Box::new(fake.clone()) as Box<dyn AudioOutput>),
            Arc::new(FixedDecoder),
        )
    }

    const URI_A: &str = "data:audio/wav;base64,AAAA";
    const URI_B: &str = "data:audio/wav;base64,BBBB";

    #[test]
    fn output_is_created_lazily() {
        let fake = FakeOutput::default();
        let ctx = context(&fake);
        assert!(!ctx.is_initialized());

        ctx.play(URI_A, PlayOptions::default()).unwrap();
        assert!(ctx.is_initialized());
    }

    #[test]
    fn identical_payloads_decode_once() {
        let fake = FakeOutput::default();
        let ctx = context(&fake);

        ctx.play(URI_A, PlayOptions::default()).unwrap();
        ctx.play(URI_A, PlayOptions::default()).unwrap();
        ctx.play(URI_B, PlayOptions::default()).unwrap();

        assert_eq!(ctx.decode_count(), 2);
        assert_eq!(ctx.cached_buffers(), 2);
        assert_eq!(fake.0.lock().unwrap().started.len(), 3);
    }

    #[test]
    fn suspended_output_is_resumed_before_start() {
        let fake = FakeOutput::default();
        let ctx = context(&fake);
        ctx.play(URI_A, PlayOptions::default()).unwrap();

        fake.0.lock().unwrap().suspended = true;
        ctx.play(URI_A, PlayOptions::default()).unwrap();

        let shared = fake.0.lock().unwrap();
        assert_eq!(shared.resumes, 1);
        assert!(!shared.suspended);
    }

    #[test]
    fn pump_fires_callbacks_once() {
        let fake = FakeOutput::default();
        let ctx = context(&fake);
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&fired);
        let handle = ctx
            .play(
                URI_A,
                PlayOptions::default().with_on_end(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        assert_eq!(ctx.pump(), 0);
        fake.0.lock().unwrap().finished.push(handle.voice_id());
        assert_eq!(ctx.pump(), 1);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // A duplicate finish report must not fire again
        fake.0.lock().unwrap().finished.push(handle.voice_id());
        ctx.pump();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.active_voices(), 0);
    }

    #[test]
    fn invalid_options_are_rejected_before_decoding() {
        let fake = FakeOutput::default();
        let ctx = context(&fake);
        let options = PlayOptions::new(VoiceParams {
            volume: 2.0,
            playback_rate: 1.0,
        });
        assert!(matches!(
            ctx.play(URI_A, options),
            Err(PlaybackError::InvalidOption(_))
        ));
        assert_eq!(ctx.decode_count(), 0);
        assert!(!ctx.is_initialized());
    }

    #[test]
    fn malformed_uri_is_a_decode_error() {
        let fake = FakeOutput::default();
        let ctx = context(&fake);
        assert!(matches!(
            ctx.play("not a data uri", PlayOptions::default()),
            Err(PlaybackError::Decode(_))
        ));
    }

    #[test]
    fn cache_key_is_hex_sha256() {
        let key = cache_key(URI_A);
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(key, cache_key(URI_B));
    }
}
