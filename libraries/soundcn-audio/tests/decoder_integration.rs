//! Decoding real WAV payloads generated with hound

use soundcn_audio::{encode_data_uri, SymphoniaDecoder};
use soundcn_core::{AssetFormat, AudioDecoder, SoundAsset};
use std::io::Cursor;

/// Mono 16-bit sine, `frames` long
fn sine_wav(sample_rate: u32, channels: u16, frames: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut bytes = Vec::new();
    {
        let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
        for i in 0..frames {
            let t = i as f32 / sample_rate as f32;
            let sample = (t * 440.0 * 2.0 * std::f32::consts::PI).sin() * 0.5;
            for _ in 0..channels {
                writer.write_sample((sample * i16::MAX as f32) as i16).unwrap();
            }
        }
        writer.finalize().unwrap();
    }
    bytes
}

fn asset(name: &str, data_uri: String) -> SoundAsset {
    SoundAsset {
        name: name.to_string(),
        data_uri,
        duration: 0.1,
        format: AssetFormat::Wav,
        license: "CC0".to_string(),
        author: "Test".to_string(),
    }
}

#[test]
fn decodes_mono_wav_to_stereo() {
    let bytes = sine_wav(22_050, 1, 2_205);
    let buffer = SymphoniaDecoder::new()
        .decode(&bytes, Some(AssetFormat::Wav))
        .unwrap();

    assert_eq!(buffer.format.sample_rate.as_hz(), 22_050);
    assert_eq!(buffer.format.channels, 2);
    assert_eq!(buffer.frames(), 2_205);
    assert!((buffer.duration_secs() - 0.1).abs() < 1e-3);
    assert!(buffer.samples.iter().all(|s| s.is_finite() && s.abs() <= 1.0));

    let frame = &buffer.samples[200..202];
    assert_eq!(frame[0], frame[1]);
}

#[test]
fn decodes_without_format_hint() {
    let bytes = sine_wav(48_000, 2, 480);
    let buffer = SymphoniaDecoder::new().decode(&bytes, None).unwrap();
    assert_eq!(buffer.format.sample_rate.as_hz(), 48_000);
    assert_eq!(buffer.frames(), 480);
}

#[test]
fn decodes_asset_data_uri() {
    let bytes = sine_wav(44_100, 1, 4_410);
    let asset = asset("tone-a", encode_data_uri(AssetFormat::Wav, &bytes));

    let buffer = SymphoniaDecoder::new().decode_asset(&asset).unwrap();
    assert_eq!(buffer.frames(), 4_410);
}

#[test]
fn corrupt_asset_is_a_decode_error() {
    let asset = asset("broken", "data:audio/wav;base64,AAAAAAAA".to_string());
    let err = SymphoniaDecoder::new().decode_asset(&asset).unwrap_err();
    assert!(matches!(err, soundcn_core::SoundError::Decode(_)));

    let asset = asset_with_bad_uri();
    assert!(SymphoniaDecoder::new().decode_asset(&asset).is_err());
}

fn asset_with_bad_uri() -> SoundAsset {
    asset("bad-uri", "https://example.com/sound.wav".to_string())
}
