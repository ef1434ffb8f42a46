//! Raw registry manifest shape
//!
//! Mirrors `registry.json` as produced by the registry tooling. Every field is
//! optional and lenient: a value of the wrong JSON type deserializes as `None`
//! instead of failing the whole manifest, so the catalog can apply its
//! default-value policy.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

/// `type` tag of manifest items that are installable sounds
pub const BLOCK_ITEM_TYPE: &str = "registry:block";

/// Top-level manifest document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawManifest {
    /// Registry items (sounds and support files)
    #[serde(default)]
    pub items: Vec<RawItem>,
}

/// One manifest item
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawItem {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,

    /// Registry item type (`registry:block`, `registry:hook`, ...)
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub item_type: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub categories: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient")]
    pub meta: Option<RawMeta>,
}

/// Item `meta` object
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeta {
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<f64>,

    #[serde(default, deserialize_with = "lenient")]
    pub size_kb: Option<f64>,

    #[serde(default, deserialize_with = "lenient")]
    pub license: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub tags: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient")]
    pub keywords: Option<Vec<String>>,
}

impl RawItem {
    /// Whether this item is an installable sound
    pub fn is_block(&self) -> bool {
        self.item_type.as_deref() == Some(BLOCK_ITEM_TYPE)
    }
}

/// Deserialize any JSON value, keeping it only if it has the expected shape
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_item() {
        let json = r#"{
            "$schema": "https://ui.shadcn.com/schema/registry.json",
            "name": "soundcn",
            "items": [{
                "name": "click-soft",
                "type": "registry:block",
                "title": "Click Soft",
                "description": "Click Soft sound effect.",
                "categories": ["click"],
                "author": "Kenney <https://kenney.nl>",
                "meta": {"duration": 0.18, "sizeKb": 3, "license": "CC0", "tags": ["click", "soft"]},
                "registryDependencies": ["use-sound"]
            }]
        }"#;
        let manifest: RawManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.items.len(), 1);
        let item = &manifest.items[0];
        assert!(item.is_block());
        let meta = item.meta.as_ref().unwrap();
        assert_eq!(meta.size_kb, Some(3.0));
        assert_eq!(meta.tags.as_deref().map(<[String]>::len), Some(2));
    }

    #[test]
    fn malformed_optional_fields_become_none() {
        let json = r#"{"items": [{
            "name": "zap",
            "type": "registry:block",
            "title": "Zap",
            "categories": "laser",
            "meta": {"duration": "long", "sizeKb": null, "tags": [1, 2]}
        }]}"#;
        let manifest: RawManifest = serde_json::from_str(json).unwrap();
        let item = &manifest.items[0];
        assert!(item.categories.is_none());
        let meta = item.meta.as_ref().unwrap();
        assert!(meta.duration.is_none());
        assert!(meta.size_kb.is_none());
        assert!(meta.tags.is_none());
    }

    #[test]
    fn missing_items_is_empty_manifest() {
        let manifest: RawManifest = serde_json::from_str("{}").unwrap();
        assert!(manifest.items.is_empty());
    }
}
