//! Related-sounds resolution for the detail view

use soundcn_core::{BroadCategory, CatalogEntry};

/// Number of related sounds shown by default
pub const DEFAULT_RELATED_LIMIT: usize = 8;

/// Entries in the same broad category as the viewed sound
///
/// Excludes `exclude_name`, keeps catalog (title) order, and returns at most
/// `limit` entries. Deterministic: no shuffling or scoring.
pub fn related_sounds<'a>(
    entries: &'a [CatalogEntry],
    exclude_name: &str,
    broad_category: BroadCategory,
    limit: usize,
) -> Vec<&'a CatalogEntry> {
    entries
        .iter()
        .filter(|entry| entry.broad_category == broad_category && entry.name != exclude_name)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundcn_core::EntryMeta;

    fn entry(name: &str, category: BroadCategory) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            title: name.to_string(),
            description: String::new(),
            author: "Unknown".to_string(),
            categories: Vec::new(),
            primary_category: String::new(),
            broad_category: category,
            meta: EntryMeta::default(),
        }
    }

    #[test]
    fn excludes_self_and_other_categories() {
        let entries = vec![
            entry("click-a", BroadCategory::Ui),
            entry("boom", BroadCategory::Impact),
            entry("click-b", BroadCategory::Ui),
        ];
        let related = related_sounds(&entries, "click-a", BroadCategory::Ui, 8);
        let names: Vec<_> = related.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["click-b"]);
    }

    #[test]
    fn truncates_to_limit_in_catalog_order() {
        let entries: Vec<_> = (0..20)
            .map(|i| entry(&format!("tone-{i:02}"), BroadCategory::Tones))
            .collect();
        let related = related_sounds(&entries, "tone-03", BroadCategory::Tones, DEFAULT_RELATED_LIMIT);
        assert_eq!(related.len(), 8);
        assert_eq!(related[2].name, "tone-02");
        assert_eq!(related[3].name, "tone-04");
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let entries = vec![entry("a", BroadCategory::Ui)];
        assert!(related_sounds(&entries, "x", BroadCategory::Ui, 0).is_empty());
    }
}
