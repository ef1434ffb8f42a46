//! Shared fixtures for playback integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use soundcn_audio::encode_data_uri;
use soundcn_core::{AssetFormat, AudioBuffer, SoundAsset};
use soundcn_playback::{
    AssetSource, AudioOutput, OutputState, PlaybackContext, Result, StaticAssetSource, VoiceId,
    VoiceParams,
};
use std::collections::HashSet;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Recorded activity of a `MockOutput`
#[derive(Default)]
pub struct MockState {
    next_id: u64,
    pub started: Vec<(VoiceId, VoiceParams, usize)>,
    pub stopped: Vec<VoiceId>,
    live: HashSet<VoiceId>,
    finished: Vec<VoiceId>,
    pub suspended: bool,
    pub resume_calls: usize,
}

/// Scripted output: voices play until the test calls `finish`
#[derive(Clone, Default)]
pub struct MockOutput {
    state: Arc<Mutex<MockState>>,
    pub created: Arc<AtomicUsize>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context whose output factory hands out this mock
    pub fn context(&self) -> PlaybackContext {
        let mock = self.clone();
        PlaybackContext::new(move || {
            mock.created.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(mock.clone()) as Box<dyn AudioOutput>)
        })
    }

    /// Simulate a voice reaching its natural end
    pub fn finish(&self, voice: VoiceId) {
        let mut state = self.state.lock().unwrap();
        if state.live.remove(&voice) {
            state.finished.push(voice);
        }
    }

    /// Natural end of every live voice
    pub fn finish_all(&self) {
        let mut state = self.state.lock().unwrap();
        let live: Vec<_> = state.live.drain().collect();
        state.finished.extend(live);
    }

    pub fn suspend(&self) {
        self.state.lock().unwrap().suspended = true;
    }

    pub fn started_count(&self) -> usize {
        self.state.lock().unwrap().started.len()
    }

    pub fn live_count(&self) -> usize {
        self.state.lock().unwrap().live.len()
    }

    pub fn last_voice(&self) -> Option<VoiceId> {
        self.state.lock().unwrap().started.last().map(|(id, _, _)| *id)
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&MockState) -> R) -> R {
        f(&self.state.lock().unwrap())
    }
}

impl AudioOutput for MockOutput {
    fn state(&self) -> OutputState {
        if self.state.lock().unwrap().suspended {
            OutputState::Suspended
        } else {
            OutputState::Running
        }
    }

    fn resume(&mut self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.suspended = false;
        state.resume_calls += 1;
        Ok(())
    }

    fn start(&mut self, buffer: Arc<AudioBuffer>, params: VoiceParams) -> Result<VoiceId> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let voice = VoiceId(state.next_id);
        state.started.push((voice, params, buffer.frames()));
        state.live.insert(voice);
        Ok(voice)
    }

    fn stop(&mut self, voice: VoiceId) {
        let mut state = self.state.lock().unwrap();
        state.live.remove(&voice);
        state.finished.retain(|v| *v != voice);
        state.stopped.push(voice);
    }

    fn drain_finished(&mut self) -> Vec<VoiceId> {
        std::mem::take(&mut self.state.lock().unwrap().finished)
    }
}

/// 16-bit mono WAV of `frames` frames at 22.05 kHz
pub fn wav_bytes(frames: u32, seed: i16) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 22_050,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut bytes = Vec::new();
    {
        let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
        for i in 0..frames {
            writer.write_sample(seed.wrapping_add((i % 100) as i16)).unwrap();
        }
        writer.finalize().unwrap();
    }
    bytes
}

/// Asset with a decodable WAV payload unique to `name`
pub fn wav_asset(name: &str) -> SoundAsset {
    let seed = name
        .bytes()
        .fold(0i16, |acc, b| acc.wrapping_add(i16::from(b)));
    SoundAsset {
        name: name.to_string(),
        data_uri: encode_data_uri(AssetFormat::Wav, &wav_bytes(2_205, seed)),
        duration: 0.1,
        format: AssetFormat::Wav,
        license: "CC0".to_string(),
        author: "Kenney".to_string(),
    }
}

pub fn static_source(names: &[&str]) -> StaticAssetSource {
    names.iter().map(|name| wav_asset(name)).collect()
}

/// Source that counts calls and optionally holds each fetch until released
pub struct GatedSource {
    inner: StaticAssetSource,
    pub calls: AtomicUsize,
    gated: bool,
    pub started: Arc<Notify>,
    pub gate: Arc<Notify>,
}

impl GatedSource {
    pub fn open(inner: StaticAssetSource) -> Self {
        Self::build(inner, false)
    }

    pub fn gated(inner: StaticAssetSource) -> Self {
        Self::build(inner, true)
    }

    fn build(inner: StaticAssetSource, gated: bool) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            gated,
            started: Arc::new(Notify::new()),
            gate: Arc::new(Notify::new()),
        }
    }
}

#[async_trait]
impl AssetSource for GatedSource {
    async fn fetch(&self, name: &str) -> Result<SoundAsset> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.gated {
            self.started.notify_one();
            self.gate.notified().await;
        }
        self.inner.fetch(name).await
    }
}
