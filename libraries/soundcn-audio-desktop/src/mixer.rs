//! Voice mixer (runs inside the real-time audio callback)
//!
//! Sums any number of one-shot voices into the device buffer. Each voice reads
//! its decoded buffer through a fractional cursor, so sample-rate conversion
//! and playback rate are one linear-interpolation step:
//! `step = playback_rate * source_rate / device_rate`.
//!
//! The mixer never allocates per callback once voices are started and never
//! blocks: commands arrive through `apply`, finished voice ids leave through a
//! non-blocking channel.

use crossbeam_channel::Sender;
use soundcn_core::AudioBuffer;
use soundcn_playback::{VoiceId, VoiceParams};
use std::sync::Arc;

/// Messages from the control side to the mixer
#[derive(Debug)]
pub enum MixerCommand {
    /// Begin a new voice
    Start {
        id: VoiceId,
        buffer: Arc<AudioBuffer>,
        params: VoiceParams,
    },
    /// Drop a voice without reporting it as finished
    Stop(VoiceId),
}

struct Voice {
    id: VoiceId,
    buffer: Arc<AudioBuffer>,
    /// Position in source frames
    cursor: f64,
    /// Source frames advanced per device frame
    step: f64,
    gain: f32,
}

impl Voice {
    /// Interpolated sample of source channel `channel` at the cursor
    fn sample(&self, channel: usize) -> f32 {
        let source_channels = usize::from(self.buffer.format.channels.max(1));
        let channel = channel.min(source_channels - 1);
        let frames = self.buffer.frames();

        let index = self.cursor as usize;
        let next = (index + 1).min(frames - 1);
        let fraction = (self.cursor - index as f64) as f32;

        let a = self.buffer.samples[index * source_channels + channel];
        let b = self.buffer.samples[next * source_channels + channel];
        a + (b - a) * fraction
    }

    fn is_finished(&self) -> bool {
        self.cursor >= self.buffer.frames() as f64
    }
}

/// Sums active voices into interleaved device frames
pub struct Mixer {
    device_rate: u32,
    device_channels: usize,
    voices: Vec<Voice>,
    finished_tx: Sender<VoiceId>,
}

impl Mixer {
    /// Create a mixer for a device layout
    pub fn new(device_rate: u32, device_channels: u16, finished_tx: Sender<VoiceId>) -> Self {
        Self {
            device_rate: device_rate.max(1),
            device_channels: usize::from(device_channels.max(1)),
            voices: Vec::with_capacity(16),
            finished_tx,
        }
    }

    /// Apply one control message
    pub fn apply(&mut self, command: MixerCommand) {
        match command {
            MixerCommand::Start { id, buffer, params } => {
                if buffer.frames() == 0 {
                    // Nothing to play: report the natural end right away
                    let _ = self.finished_tx.send(id);
                    return;
                }
                let source_rate = f64::from(buffer.format.sample_rate.as_hz().max(1));
                let step =
                    f64::from(params.playback_rate) * source_rate / f64::from(self.device_rate);
                self.voices.push(Voice {
                    id,
                    buffer,
                    cursor: 0.0,
                    step,
                    gain: params.volume,
                });
            }
            MixerCommand::Stop(id) => {
                self.voices.retain(|voice| voice.id != id);
            }
        }
    }

    /// Fill `out` (interleaved, `device_channels` wide) with the mix
    pub fn render(&mut self, out: &mut [f32]) {
        out.fill(0.0);
        let channels = self.device_channels;

        for voice in &mut self.voices {
            for frame in out.chunks_exact_mut(channels) {
                if voice.is_finished() {
                    break;
                }

                let left = voice.sample(0) * voice.gain;
                let right = voice.sample(1) * voice.gain;

                if channels == 1 {
                    frame[0] += (left + right) * 0.5;
                } else {
                    frame[0] += left;
                    frame[1] += right;
                }

                voice.cursor += voice.step;
            }
        }

        for sample in out.iter_mut() {
            *sample = sample.clamp(-1.0, 1.0);
        }

        let finished_tx = &self.finished_tx;
        self.voices.retain(|voice| {
            if voice.is_finished() {
                let _ = finished_tx.send(voice.id);
                false
            } else {
                true
            }
        });
    }

    /// Number of voices still sounding
    pub fn voice_count(&self) -> usize {
        self.voices.len()
    }
}
