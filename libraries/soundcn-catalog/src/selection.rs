//! Batch selection for multi-sound installs
//!
//! The selection belongs to one filter state: any change of query or category
//! clears it, so a batch command never includes sounds the user can no longer
//! see.

use crate::filter::CategorySelection;
use soundcn_core::CatalogEntry;
use std::collections::HashSet;

/// Set of selected slugs plus the filter state it was made under
#[derive(Debug, Clone, Default)]
pub struct BatchSelection {
    names: HashSet<String>,
    query: String,
    category: CategorySelection,
}

impl BatchSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the slug if absent, remove it if present
    ///
    /// Returns whether the slug is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    /// Drop every selected slug
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Record the current filter state, clearing the selection if it changed
    ///
    /// Returns true when the selection was reset.
    pub fn sync_filters(&mut self, query: &str, category: CategorySelection) -> bool {
        if self.query == query && self.category == category {
            return false;
        }
        self.query = query.to_string();
        self.category = category;
        let had_selection = !self.names.is_empty();
        self.names.clear();
        had_selection
    }

    /// Whether a slug is selected
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Selection mode is active while anything is selected
    pub fn is_active(&self) -> bool {
        !self.names.is_empty()
    }

    /// Number of selected slugs
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Selected slugs in the order they appear in `entries`
    pub fn ordered_names<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a str> {
        entries
            .iter()
            .filter(|entry| self.names.contains(&entry.name))
            .map(|entry| entry.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundcn_core::{BroadCategory, EntryMeta};

    fn entry(name: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            title: name.to_string(),
            description: String::new(),
            author: "Unknown".to_string(),
            categories: Vec::new(),
            primary_category: String::new(),
            broad_category: BroadCategory::Ui,
            meta: EntryMeta::default(),
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = BatchSelection::new();
        assert!(selection.toggle("click"));
        assert!(selection.is_active());
        assert!(!selection.toggle("click"));
        assert!(selection.is_empty());
    }

    #[test]
    fn filter_change_clears_selection() {
        let mut selection = BatchSelection::new();
        selection.toggle("click");
        assert!(!selection.sync_filters("", CategorySelection::All));
        assert!(selection.contains("click"));

        assert!(selection.sync_filters("cl", CategorySelection::All));
        assert!(selection.is_empty());

        selection.toggle("click");
        assert!(selection.sync_filters("cl", CategorySelection::Only(BroadCategory::Ui)));
        assert!(selection.is_empty());
    }

    #[test]
    fn ordered_names_follow_catalog_order() {
        let entries = vec![entry("a"), entry("b"), entry("c")];
        let mut selection = BatchSelection::new();
        selection.toggle("c");
        selection.toggle("a");
        selection.toggle("ghost");
        assert_eq!(selection.ordered_names(&entries), vec!["a", "c"]);
        assert_eq!(selection.len(), 3);
    }
}
