//! Search and category filtering
//!
//! Both operations are linear scans over the catalog slice. `filter` preserves
//! input order; `build_category_options` always counts the full catalog so the
//! facet numbers do not jump around while the user types.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use soundcn_core::{BroadCategory, CatalogEntry};
use std::fmt;
use std::str::FromStr;

/// Key of the synthetic facet that matches every entry
pub const ALL_CATEGORY: &str = "all";

/// Label of the synthetic facet
const ALL_LABEL: &str = "All";

/// Active category of a browsing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelection {
    /// No category restriction
    #[default]
    All,

    /// Only entries whose broad category is exactly this one
    Only(BroadCategory),
}

impl CategorySelection {
    /// Whether an entry passes the category predicate
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(category) => entry.broad_category == *category,
        }
    }

    /// Facet key this selection corresponds to
    pub fn key(&self) -> &'static str {
        match self {
            CategorySelection::All => ALL_CATEGORY,
            CategorySelection::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CategorySelection {
    type Err = CatalogError;

    /// `"all"` or an exact broad category label
    fn from_str(s: &str) -> Result<Self> {
        if s == ALL_CATEGORY {
            return Ok(CategorySelection::All);
        }
        s.parse::<BroadCategory>()
            .map(CategorySelection::Only)
            .map_err(|_| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// One category option with its entry count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFacet {
    /// Filter key (`"all"` or the category label)
    pub key: String,

    /// Display text
    pub label: String,

    /// Number of catalog entries in this facet
    pub count: usize,
}

/// Visible subset for a query and category
///
/// The query is trimmed and lower-cased; an empty query matches everything.
/// Otherwise it must occur as a plain substring of the entry's search
/// haystack (slug, title, description, and tags).
pub fn filter<'a>(
    entries: &'a [CatalogEntry],
    query: &str,
    category: &CategorySelection,
) -> Vec<&'a CatalogEntry> {
    let needle = query.trim().to_lowercase();

    entries
        .iter()
        .filter(|entry| category.matches(entry))
        .filter(|entry| needle.is_empty() || entry.search_haystack().contains(&needle))
        .collect()
}

/// Facets for the category filter control
///
/// `All` first with the full catalog size, then every broad category that has
/// at least one entry, in display order.
pub fn build_category_options(entries: &[CatalogEntry]) -> Vec<CategoryFacet> {
    let mut counts = [0usize; BroadCategory::ORDER.len()];
    for entry in entries {
        counts[entry.broad_category.position()] += 1;
    }

    let mut facets = Vec::with_capacity(counts.len() + 1);
    facets.push(CategoryFacet {
        key: ALL_CATEGORY.to_string(),
        label: ALL_LABEL.to_string(),
        count: entries.len(),
    });

    facets.extend(
        BroadCategory::ORDER
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(category, count)| CategoryFacet {
                key: category.label().to_string(),
                label: category.label().to_string(),
                count,
            }),
    );

    facets
}
