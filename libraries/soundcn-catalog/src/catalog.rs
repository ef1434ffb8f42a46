//! Catalog model - normalization of the raw manifest
//!
//! Built once at startup. Entries are ordered by title and the order never
//! changes afterwards; a slug index gives O(1) lookup.

use crate::error::Result;
use soundcn_core::types::entry::{UNCATEGORIZED, UNKNOWN_AUTHOR, UNKNOWN_LICENSE};
use soundcn_core::{BroadCategory, CatalogEntry, EntryMeta, RawItem, RawManifest};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The ordered, immutable set of catalog entries
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Entries sorted by title
    entries: Vec<CatalogEntry>,

    /// Slug -> position in `entries`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Parse a manifest document and build the catalog
    pub fn from_json_str(json: &str) -> Result<Self> {
        let manifest: RawManifest = serde_json::from_str(json)?;
        Ok(build_catalog(&manifest))
    }

    /// Read a manifest file and build the catalog
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(
            "Loaded {} catalog entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// All entries in title order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by slug
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    /// Whether a slug is present
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in title order
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Normalize a raw manifest into the catalog
///
/// Only `registry:block` items are kept. Items without a usable slug are
/// skipped, and so are later items repeating a slug already seen. Every other
/// gap in the source data degrades to the documented defaults.
pub fn build_catalog(manifest: &RawManifest) -> Catalog {
    let mut entries: Vec<CatalogEntry> = Vec::with_capacity(manifest.items.len());
    let mut seen: HashSet<String> = HashSet::with_capacity(manifest.items.len());

    for (position, item) in manifest.items.iter().enumerate() {
        if !item.is_block() {
            continue;
        }

        let Some(entry) = normalize_item(item) else {
            tracing::warn!("Skipping manifest item #{} without a name", position);
            continue;
        };

        if !seen.insert(entry.name.clone()) {
            tracing::warn!("Skipping duplicate manifest item: {}", entry.name);
            continue;
        }

        entries.push(entry);
    }

    entries.sort_by(|a, b| compare_titles(&a.title, &b.title).then_with(|| a.name.cmp(&b.name)));

    let index = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| (entry.name.clone(), position))
        .collect();

    Catalog { entries, index }
}

/// Apply the default-value policy to one block item
fn normalize_item(item: &RawItem) -> Option<CatalogEntry> {
    let name = item.name.as_deref().filter(|n| !n.trim().is_empty())?;

    let categories = item.categories.clone().unwrap_or_default();
    let primary_category = categories
        .first()
        .cloned()
        .unwrap_or_else(|| UNCATEGORIZED.to_string());
    let broad_category = BroadCategory::from_primary(&primary_category);

    let meta = item
        .meta
        .as_ref()
        .map(|raw| EntryMeta {
            duration: raw.duration.filter(|d| d.is_finite()).unwrap_or(0.0).max(0.0),
            size_kb: raw
                .size_kb
                .filter(|s| s.is_finite())
                .map(|s| s.max(0.0).round().min(f64::from(u32::MAX)) as u32)
                .unwrap_or(0),
            license: raw
                .license
                .clone()
                .unwrap_or_else(|| UNKNOWN_LICENSE.to_string()),
            tags: raw.tags.clone().unwrap_or_default(),
            keywords: raw.keywords.clone().unwrap_or_default(),
        })
        .unwrap_or_default();

    Some(CatalogEntry {
        name: name.to_string(),
        title: item.title.clone().unwrap_or_else(|| name.to_string()),
        description: item.description.clone().unwrap_or_default(),
        author: item
            .author
            .clone()
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        categories,
        primary_category,
        broad_category,
        meta,
    })
}

/// Locale-style title ordering
///
/// Titles compare by base letters first, ignoring case and accents, so
/// "Éclair" sorts among the E titles. Accents break ties next, then exact
/// code-point order.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| case_folded(a).cmp(case_folded(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(title: &str) -> impl Iterator<Item = char> + '_ {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn case_folded(title: &str) -> impl Iterator<Item = char> + '_ {
    title.nfd().flat_map(char::to_lowercase)
}
