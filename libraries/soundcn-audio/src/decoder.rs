/// Audio decoder implementation using Symphonia
use crate::data_uri::DataUri;
use crate::error::AudioError;
use soundcn_core::{
    AssetFormat, AudioBuffer, AudioDecoder as AudioDecoderTrait, AudioFormat, SampleRate,
    SoundAsset,
};
use std::io::Cursor;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Audio decoder using Symphonia
///
/// Supports: MP3, WAV, OGG/Vorbis
///
/// Payloads are short UI sounds, so the whole stream is decoded into memory
/// in one pass. Output is always interleaved stereo f32.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode the payload embedded in a sound asset
    ///
    /// The MIME type in the data URI wins over the asset's declared format
    /// when both are present.
    pub fn decode_asset(&self, asset: &SoundAsset) -> soundcn_core::Result<AudioBuffer> {
        let uri = DataUri::parse(&asset.data_uri)?;
        let bytes = uri.decode()?;
        let hint = uri.format().or(Some(asset.format));
        self.decode(&bytes, hint)
    }

    /// Fold N interleaved channels into stereo
    ///
    /// Mono is duplicated; channels past the first two are mixed into both
    /// sides at -3 dB.
    fn to_stereo(interleaved: &[f32], channels: usize, out: &mut Vec<f32>) {
        const SIDE_MIX: f32 = 0.707;

        match channels {
            0 => {}
            1 => {
                for &sample in interleaved {
                    out.push(sample);
                    out.push(sample);
                }
            }
            2 => out.extend_from_slice(interleaved),
            _ => {
                for frame in interleaved.chunks_exact(channels) {
                    let extra: f32 = frame[2..].iter().sum::<f32>() * SIDE_MIX;
                    out.push((frame[0] + extra).clamp(-1.0, 1.0));
                    out.push((frame[1] + extra).clamp(-1.0, 1.0));
                }
            }
        }
    }
}

impl AudioDecoderTrait for SymphoniaDecoder {
    fn decode(&self, bytes: &[u8], hint: Option<AssetFormat>) -> soundcn_core::Result<AudioBuffer> {
        if bytes.is_empty() {
            return Err(AudioError::DecodeError("Empty payload".to_string()).into());
        }

        let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes.to_vec())), Default::default());

        // Create a hint to help the format registry guess the format
        let mut probe_hint = Hint::new();
        if let Some(format) = hint {
            probe_hint.with_extension(format.extension());
            probe_hint.mime_type(format.mime_type());
        }

        let probed = symphonia::default::get_probe()
            .format(
                &probe_hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::Symphonia(format!("Failed to probe payload: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| AudioError::DecodeError("No audio tracks found".to_string()))?;

        let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);
        let track_id = track.id;

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::Symphonia(format!("Failed to create decoder: {}", e)))?;

        let mut all_samples = Vec::new();
        let mut sample_buf: Option<SampleBuffer<f32>> = None;

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                    break;
                }
                Err(e) => {
                    return Err(AudioError::Symphonia(format!("Error reading packet: {}", e)).into());
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                // A corrupt frame is recoverable; skip it
                Err(SymphoniaError::DecodeError(e)) => {
                    tracing::debug!("Skipping undecodable packet: {}", e);
                    continue;
                }
                Err(e) => return Err(AudioError::DecodeError(e.to_string()).into()),
            };

            let spec = *decoded.spec();
            let channels = spec.channels.count();
            let needed = decoded.capacity() * channels;

            if sample_buf.as_ref().is_some_and(|buf| buf.capacity() < needed) {
                sample_buf = None;
            }
            let buf = sample_buf
                .get_or_insert_with(|| SampleBuffer::new(decoded.capacity() as u64, spec));
            buf.copy_interleaved_ref(decoded);

            Self::to_stereo(buf.samples(), channels, &mut all_samples);
        }

        if all_samples.is_empty() {
            return Err(AudioError::DecodeError("Payload contains no audio frames".to_string()).into());
        }

        Ok(AudioBuffer::new(
            all_samples,
            AudioFormat::stereo(SampleRate::new(sample_rate)),
        ))
    }

    fn supports_format(&self, format: AssetFormat) -> bool {
        matches!(format, AssetFormat::Mp3 | AssetFormat::Wav | AssetFormat::Ogg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_is_duplicated() {
        let mut out = Vec::new();
        SymphoniaDecoder::to_stereo(&[0.1, 0.2], 1, &mut out);
        assert_eq!(out, vec![0.1, 0.1, 0.2, 0.2]);
    }

    #[test]
    fn surround_is_folded_and_clamped() {
        let mut out = Vec::new();
        SymphoniaDecoder::to_stereo(&[0.5, -0.5, 1.0, 0.0, 0.0, 0.0], 3, &mut out);
        assert_eq!(out.len(), 4);
        assert!((out[0] - 1.0).abs() < f32::EPSILON);
        assert!((out[1] - 0.207).abs() < 1e-3);
    }

    #[test]
    fn garbage_is_rejected() {
        let decoder = SymphoniaDecoder::new();
        assert!(decoder.decode(b"definitely not audio", None).is_err());
        assert!(decoder.decode(&[], Some(AssetFormat::Mp3)).is_err());
    }

    #[test]
    fn supports_every_asset_format() {
        let decoder = SymphoniaDecoder::new();
        assert!(decoder.supports_format(AssetFormat::Mp3));
        assert!(decoder.supports_format(AssetFormat::Wav));
        assert!(decoder.supports_format(AssetFormat::Ogg));
    }
}
