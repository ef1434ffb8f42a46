/// CPAL-based audio output (audio thread + voice mixer)
use crate::error::{OutputError, Result};
use crate::mixer::{Mixer, MixerCommand};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Stream, StreamConfig};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use soundcn_core::AudioBuffer;
use soundcn_playback::{AudioOutput, OutputState, VoiceId, VoiceParams};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Commands sent to the audio thread
enum ControlCommand {
    /// Pause the stream
    Pause,
    /// Resume the stream
    Resume,
    /// Shutdown the audio thread
    Shutdown,
}

/// CPAL audio output
///
/// **Architecture**: a dedicated audio thread owns the CPAL `Stream`, which is
/// not `Send` on every platform. The stream callback owns the `Mixer`; voice
/// commands reach it through a lock-free channel and finished voice ids come
/// back the same way.
pub struct CpalOutput {
    /// Stream control (pause/resume/shutdown)
    control_tx: Sender<ControlCommand>,
    /// Voice commands consumed by the audio callback
    mixer_tx: Sender<MixerCommand>,
    /// Voices that reached their natural end
    finished_rx: Receiver<VoiceId>,
    /// Set while the stream is paused
    suspended: bool,
    /// Device sample rate
    sample_rate: u32,
    /// Device channel count
    channels: u16,
    next_voice: u64,
    /// Handle to the audio thread
    _audio_thread: Option<JoinHandle<()>>,
}

impl CpalOutput {
    /// Open the default output device
    ///
    /// # Errors
    /// Returns an error if no audio device is found or the stream cannot be
    /// built and started
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(OutputError::DeviceNotFound)?;

        let config = device.default_output_config()?;
        let sample_rate = config.sample_rate();
        let channels = config.channels();
        let config = config.config();

        Self::with_device_and_config(device, config, sample_rate, channels)
    }

    fn with_device_and_config(
        device: Device,
        config: StreamConfig,
        sample_rate: u32,
        channels: u16,
    ) -> Result<Self> {
        let (control_tx, control_rx) = bounded::<ControlCommand>(8);
        let (mixer_tx, mixer_rx) = unbounded::<MixerCommand>();
        let (finished_tx, finished_rx) = unbounded::<VoiceId>();
        let (init_tx, init_rx) = bounded::<Result<()>>(1);

        let mixer = Mixer::new(sample_rate, channels, finished_tx);
        let audio_thread = thread::Builder::new()
            .name("soundcn-audio".to_string())
            .spawn(move || {
                Self::audio_thread_run(&device, &config, mixer, mixer_rx, &control_rx, &init_tx);
            })
            .map_err(|e| OutputError::ThreadError(e.to_string()))?;

        // Surface stream build failures to the caller instead of a silent thread
        init_rx
            .recv()
            .map_err(|e| OutputError::ThreadError(e.to_string()))??;

        tracing::debug!(
            "Audio output running at {} Hz, {} channel(s)",
            sample_rate,
            channels
        );

        Ok(Self {
            control_tx,
            mixer_tx,
            finished_rx,
            suspended: false,
            sample_rate,
            channels,
            next_voice: 0,
            _audio_thread: Some(audio_thread),
        })
    }

    /// Open the default device as a boxed `AudioOutput`
    ///
    /// Shaped to be passed straight to `PlaybackContext::new`.
    pub fn open_default() -> soundcn_playback::Result<Box<dyn AudioOutput>> {
        Ok(Box::new(Self::new()?))
    }

    /// Device sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Device channel count
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Pause the device stream; `resume` restarts it
    pub fn suspend(&mut self) -> Result<()> {
        self.control_tx
            .send(ControlCommand::Pause)
            .map_err(|e| OutputError::ThreadError(e.to_string()))?;
        self.suspended = true;
        Ok(())
    }

    /// Audio thread main loop
    ///
    /// Owns the stream for its whole life and services control commands
    /// until shutdown or until every sender is gone.
    fn audio_thread_run(
        device: &Device,
        config: &StreamConfig,
        mut mixer: Mixer,
        mixer_rx: Receiver<MixerCommand>,
        control_rx: &Receiver<ControlCommand>,
        init_tx: &Sender<Result<()>>,
    ) {
        let stream = match Self::build_stream(device, config, move |data: &mut [f32]| {
            while let Ok(command) = mixer_rx.try_recv() {
                mixer.apply(command);
            }
            mixer.render(data);
        }) {
            Ok(stream) => {
                let _ = init_tx.send(Ok(()));
                stream
            }
            Err(e) => {
                let _ = init_tx.send(Err(e));
                return;
            }
        };

        while let Ok(command) = control_rx.recv() {
            match command {
                ControlCommand::Pause => {
                    if let Err(e) = stream.pause() {
                        tracing::warn!("Failed to pause audio stream: {}", e);
                    }
                }
                ControlCommand::Resume => {
                    if let Err(e) = stream.play() {
                        tracing::warn!("Failed to resume audio stream: {}", e);
                    }
                }
                ControlCommand::Shutdown => break,
            }
        }
    }

    fn build_stream<F>(device: &Device, config: &StreamConfig, mut render: F) -> Result<Stream>
    where
        F: FnMut(&mut [f32]) + Send + 'static,
    {
        let stream = device.build_output_stream(
            config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| render(data),
            |err| tracing::error!("Audio stream error: {}", err),
            None,
        )?;
        stream.play()?;
        Ok(stream)
    }
}

impl AudioOutput for CpalOutput {
    fn state(&self) -> OutputState {
        if self.suspended {
            OutputState::Suspended
        } else {
            OutputState::Running
        }
    }

    fn resume(&mut self) -> soundcn_playback::Result<()> {
        if !self.suspended {
            return Ok(());
        }
        self.control_tx
            .send(ControlCommand::Resume)
            .map_err(|e| OutputError::ThreadError(e.to_string()))?;
        self.suspended = false;
        Ok(())
    }

    fn start(
        &mut self,
        buffer: Arc<AudioBuffer>,
        params: VoiceParams,
    ) -> soundcn_playback::Result<VoiceId> {
        self.next_voice += 1;
        let id = VoiceId(self.next_voice);

        self.mixer_tx
            .send(MixerCommand::Start { id, buffer, params })
            .map_err(|e| OutputError::ThreadError(format!("Failed to start voice: {}", e)))?;

        Ok(id)
    }

    fn stop(&mut self, voice: VoiceId) {
        // A closed channel means the stream is gone and the voice with it
        let _ = self.mixer_tx.send(MixerCommand::Stop(voice));
    }

    fn drain_finished(&mut self) -> Vec<VoiceId> {
        self.finished_rx.try_iter().collect()
    }
}

impl Drop for CpalOutput {
    fn drop(&mut self) {
        let _ = self.control_tx.send(ControlCommand::Shutdown);
    }
}
