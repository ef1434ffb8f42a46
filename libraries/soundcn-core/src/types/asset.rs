/// Sound asset types
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Container format of an encoded sound payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetFormat {
    Mp3,
    Wav,
    Ogg,
}

impl AssetFormat {
    /// File extension (also the value sound modules declare)
    pub fn extension(&self) -> &'static str {
        match self {
            AssetFormat::Mp3 => "mp3",
            AssetFormat::Wav => "wav",
            AssetFormat::Ogg => "ogg",
        }
    }

    /// Canonical MIME type
    pub fn mime_type(&self) -> &'static str {
        match self {
            AssetFormat::Mp3 => "audio/mpeg",
            AssetFormat::Wav => "audio/wav",
            AssetFormat::Ogg => "audio/ogg",
        }
    }

    /// Resolve a MIME type, including the common aliases browsers emit
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "audio/mpeg" | "audio/mp3" | "audio/mpeg3" => Some(AssetFormat::Mp3),
            "audio/wav" | "audio/wave" | "audio/x-wav" | "audio/vnd.wave" => {
                Some(AssetFormat::Wav)
            }
            "audio/ogg" | "audio/vorbis" | "application/ogg" => Some(AssetFormat::Ogg),
            _ => None,
        }
    }
}

impl fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for AssetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mp3" => Ok(AssetFormat::Mp3),
            "wav" => Ok(AssetFormat::Wav),
            "ogg" => Ok(AssetFormat::Ogg),
            other => Err(format!("unsupported audio format: {other}")),
        }
    }
}

/// The encoded payload and format metadata of one sound
///
/// Resolved lazily from the sound's module, never part of the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundAsset {
    /// Slug of the sound this payload belongs to
    pub name: String,

    /// Base64 data URI (`data:audio/mpeg;base64,...`)
    pub data_uri: String,

    /// Duration in seconds
    pub duration: f64,

    /// Container format
    pub format: AssetFormat,

    /// License identifier
    pub license: String,

    /// Original author/creator
    pub author: String,
}

impl SoundAsset {
    /// File name a download of this asset is saved under
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(data_uri: &str) -> SoundAsset {
        SoundAsset {
            name: "click-soft".to_string(),
            data_uri: data_uri.to_string(),
            duration: 0.12,
            format: AssetFormat::Mp3,
            license: "CC0".to_string(),
            author: "Kenney".to_string(),
        }
    }

    #[test]
    fn format_aliases() {
        assert_eq!(AssetFormat::from_mime("audio/x-wav"), Some(AssetFormat::Wav));
        assert_eq!(AssetFormat::from_mime("AUDIO/MPEG"), Some(AssetFormat::Mp3));
        assert_eq!(AssetFormat::from_mime("video/mp4"), None);
        assert_eq!("OGG".parse::<AssetFormat>(), Ok(AssetFormat::Ogg));
        assert!("flac".parse::<AssetFormat>().is_err());
    }

    #[test]
    fn download_file_name_uses_format_extension() {
        assert_eq!(asset("data:audio/mpeg;base64,").file_name(), "click-soft.mp3");
    }

    #[test]
    fn deserializes_module_shape() {
        let json = r#"{"name":"zap","dataUri":"data:audio/ogg;base64,T2dn","duration":0.5,
                       "format":"ogg","license":"CC0","author":"Kenney"}"#;
        let asset: SoundAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.format, AssetFormat::Ogg);
        assert_eq!(asset.data_uri, "data:audio/ogg;base64,T2dn");
    }
}
