/// Core traits for soundcn
use crate::error::Result;
use crate::types::{AssetFormat, AudioBuffer};

/// Audio decoder trait
///
/// Implementers decode an in-memory encoded payload (the bytes behind a
/// sound's data URI) into an `AudioBuffer`.
pub trait AudioDecoder: Send + Sync {
    /// Decode a complete payload
    ///
    /// `hint` is the container format declared by the asset, if known. It only
    /// guides probing; implementers must still sniff the bytes.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a supported audio stream
    fn decode(&self, bytes: &[u8], hint: Option<AssetFormat>) -> Result<AudioBuffer>;

    /// Check if the decoder supports the given container format
    fn supports_format(&self, format: AssetFormat) -> bool;
}
