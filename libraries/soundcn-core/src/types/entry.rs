/// Catalog entry domain type
use crate::types::category::BroadCategory;
use serde::{Deserialize, Serialize};

/// Author used when the manifest does not name one
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// License used when the manifest does not name one
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// Primary category used when an item carries no raw tags
pub const UNCATEGORIZED: &str = "uncategorized";

/// One curated sound effect and its display/installation metadata
///
/// Built once from the manifest and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique kebab-case slug (primary key)
    pub name: String,

    /// Display name
    pub title: String,

    /// Free text, empty when the manifest has none
    pub description: String,

    /// Original author/creator
    pub author: String,

    /// Raw taxonomy tags, in manifest order
    pub categories: Vec<String>,

    /// First raw tag, or `"uncategorized"`
    pub primary_category: String,

    /// Coarse group derived from `primary_category`
    pub broad_category: BroadCategory,

    /// Playback and licensing metadata
    pub meta: EntryMeta,
}

/// Metadata block of a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryMeta {
    /// Duration in seconds
    pub duration: f64,

    /// Encoded payload size in kilobytes
    pub size_kb: u32,

    /// License identifier
    pub license: String,

    /// Free-form search tags
    pub tags: Vec<String>,

    /// Extra keywords carried through from the manifest
    pub keywords: Vec<String>,
}

impl Default for EntryMeta {
    fn default() -> Self {
        Self {
            duration: 0.0,
            size_kb: 0,
            license: UNKNOWN_LICENSE.to_string(),
            tags: Vec::new(),
            keywords: Vec::new(),
        }
    }
}

impl CatalogEntry {
    /// Lower-cased text the search engine matches queries against
    ///
    /// `name`, `title`, `description` and the space-joined tags, separated by
    /// single spaces.
    pub fn search_haystack(&self) -> String {
        let mut haystack = String::with_capacity(
            self.name.len() + self.title.len() + self.description.len() + 32,
        );
        haystack.push_str(&self.name);
        haystack.push(' ');
        haystack.push_str(&self.title);
        haystack.push(' ');
        haystack.push_str(&self.description);
        haystack.push(' ');
        haystack.push_str(&self.meta.tags.join(" "));
        haystack.to_lowercase()
    }
}
