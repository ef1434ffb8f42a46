//! Sound module parsing
//!
//! A sound module is a small source file exporting one object literal:
//!
//! ```text
//! export const clickSoftSound: SoundAsset = {
//!   name: "click-soft",
//!   dataUri: "data:audio/mpeg;base64,...",
//!   duration: 0.18,
//!   format: "mp3",
//!   license: "CC0",
//!   author: "Kenney",
//! };
//! ```
//!
//! Fields are pulled out by pattern (`key: "string"` and `key: number`), so
//! the module never has to be evaluated.

use crate::error::{RegistryError, Result};
use regex::Regex;
use soundcn_core::{AssetFormat, SoundAsset};
use std::sync::LazyLock;

/// Format assumed when a module does not declare one
pub const DEFAULT_FORMAT: &str = "mp3";

/// License assumed when a module does not declare one
pub const DEFAULT_LICENSE: &str = "CC0";

/// Author assumed when a module does not declare one
pub const DEFAULT_AUTHOR: &str = "Kenney";

/// Fields declared by one sound module, with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct SoundModule {
    /// Declared `name` (empty when missing)
    pub name: String,
    /// Declared `dataUri`, if any
    pub data_uri: Option<String>,
    /// Declared `duration` in seconds (0 when missing)
    pub duration: f64,
    pub format: String,
    pub license: String,
    pub author: String,
}

impl SoundModule {
    /// Extract the declared fields from module source text
    pub fn parse(source: &str) -> Self {
        let name = string_field(&NAME_FIELD, source).unwrap_or_default();
        let data_uri = string_field(&DATA_URI_FIELD, source);
        let duration = number_field(&DURATION_FIELD, source).unwrap_or(0.0);

        let or_default = |value: Option<String>, default: &str| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            name,
            data_uri,
            duration,
            format: or_default(string_field(&FORMAT_FIELD, source), DEFAULT_FORMAT),
            license: or_default(string_field(&LICENSE_FIELD, source), DEFAULT_LICENSE),
            author: or_default(string_field(&AUTHOR_FIELD, source), DEFAULT_AUTHOR),
        }
    }

    /// Whether the module declared a usable `name`
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Approximate payload size in KB, estimated from the base64 length
    pub fn size_kb(&self) -> u32 {
        let Some(data_uri) = self.data_uri.as_deref() else {
            return 0;
        };
        let payload = DATA_URI_HEADER.replace(data_uri, "");
        ((payload.len() as f64) * 3.0 / 4.0 / 1024.0).round() as u32
    }

    /// Convert into a playable asset
    ///
    /// `slug` only labels errors. The payload MIME type wins over the declared
    /// `format` when both are present.
    pub fn into_asset(self, slug: &str) -> Result<SoundAsset> {
        let invalid = |reason: &str| RegistryError::InvalidModule {
            slug: slug.to_string(),
            reason: reason.to_string(),
        };

        if !self.has_name() {
            return Err(invalid("could not parse name"));
        }
        let data_uri = self.data_uri.ok_or_else(|| invalid("no dataUri"))?;

        let mime_format = data_uri
            .strip_prefix("data:")
            .and_then(|rest| rest.split([';', ',']).next())
            .and_then(AssetFormat::from_mime);
        let format = match mime_format {
            Some(format) => format,
            None => self
                .format
                .parse()
                .map_err(|e: String| invalid(e.as_str()))?,
        };

        Ok(SoundAsset {
            name: self.name,
            data_uri,
            duration: self.duration,
            format,
            license: self.license,
            author: self.author,
        })
    }
}

static NAME_FIELD: LazyLock<Regex> = LazyLock::new(|| string_pattern("name"));
static DATA_URI_FIELD: LazyLock<Regex> = LazyLock::new(|| string_pattern("dataUri"));
static FORMAT_FIELD: LazyLock<Regex> = LazyLock::new(|| string_pattern("format"));
static LICENSE_FIELD: LazyLock<Regex> = LazyLock::new(|| string_pattern("license"));
static AUTHOR_FIELD: LazyLock<Regex> = LazyLock::new(|| string_pattern("author"));
static DURATION_FIELD: LazyLock<Regex> = LazyLock::new(|| number_pattern("duration"));

static DATA_URI_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:[^;]+;base64,").expect("Invalid data URI header regex")
});

/// `key: "value"`
fn string_pattern(key: &str) -> Regex {
    Regex::new(&format!(r#"\b{}:\s*"([^"]*)""#, regex::escape(key)))
        .expect("Invalid string field regex")
}

/// `key: 1.23`
fn number_pattern(key: &str) -> Regex {
    Regex::new(&format!(r"\b{}:\s*([\d.]+)", regex::escape(key)))
        .expect("Invalid number field regex")
}

/// First `key: "value"` occurrence
fn string_field(pattern: &Regex, source: &str) -> Option<String> {
    pattern
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First `key: 1.23` occurrence
fn number_field(pattern: &Regex, source: &str) -> Option<f64> {
    pattern
        .captures(source)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
