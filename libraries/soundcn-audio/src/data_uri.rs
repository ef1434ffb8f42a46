//! Base64 data URIs
//!
//! Sound modules embed their payload as `data:<mime>;base64,<payload>`. Only
//! the base64 form is accepted; registry tooling never emits anything else.

use crate::error::{AudioError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use soundcn_core::AssetFormat;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// Borrowed view of a parsed data URI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUri<'a> {
    mime: &'a str,
    payload: &'a str,
}

impl<'a> DataUri<'a> {
    /// Split a data URI into MIME type and base64 payload
    pub fn parse(uri: &'a str) -> Result<Self> {
        let rest = uri
            .trim()
            .strip_prefix(SCHEME)
            .ok_or_else(|| AudioError::MalformedDataUri("missing data: scheme".to_string()))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| AudioError::MalformedDataUri("missing ',' separator".to_string()))?;

        let mime = header.strip_suffix(BASE64_MARKER).ok_or_else(|| {
            AudioError::MalformedDataUri(format!("payload is not base64 encoded ({header})"))
        })?;

        Ok(Self { mime, payload })
    }

    /// Declared MIME type (may be empty)
    pub fn mime(&self) -> &'a str {
        self.mime
    }

    /// Container format implied by the MIME type
    pub fn format(&self) -> Option<AssetFormat> {
        AssetFormat::from_mime(self.mime)
    }

    /// Base64 text after the comma
    pub fn payload(&self) -> &'a str {
        self.payload
    }

    /// Decode the payload
    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(self.payload.trim())?)
    }
}

/// Build a data URI from raw bytes
pub fn encode_data_uri(format: AssetFormat, bytes: &[u8]) -> String {
    format!(
        "{SCHEME}{}{BASE64_MARKER},{}",
        format.mime_type(),
        STANDARD.encode(bytes)
    )
}
