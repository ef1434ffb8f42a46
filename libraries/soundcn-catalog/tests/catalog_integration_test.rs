//! End-to-end browsing scenarios over a manifest file on disk

use soundcn_catalog::{
    build_category_options, build_install_command, build_usage_snippet, filter, format_duration,
    format_size_kb, related_sounds, BatchSelection, Catalog, CatalogError, CategorySelection,
    PackageManager, DEFAULT_RELATED_LIMIT,
};
use soundcn_core::BroadCategory;
use std::io::Write;
use tempfile::NamedTempFile;

const MANIFEST: &str = r#"{
  "$schema": "https://ui.shadcn.com/schema/registry.json",
  "name": "soundcn",
  "items": [
    {
      "name": "use-sound",
      "type": "registry:hook",
      "title": "useSound"
    },
    {
      "name": "explosion-big",
      "type": "registry:block",
      "title": "Explosion Big",
      "description": "A large explosion",
      "author": "Kenney",
      "categories": ["explosion"],
      "meta": { "duration": 1.234, "sizeKb": 41, "license": "CC0", "tags": ["boom"] }
    },
    {
      "name": "click-soft",
      "type": "registry:block",
      "title": "Click Soft",
      "categories": ["click"],
      "meta": { "duration": 0.08, "sizeKb": 3, "license": "CC0", "tags": ["ui"] }
    },
    {
      "name": "click-hard",
      "type": "registry:block",
      "title": "Click Hard",
      "categories": ["click"],
      "meta": { "duration": 0.1, "sizeKb": 4, "tags": ["ui"] }
    },
    {
      "name": "wobble",
      "type": "registry:block",
      "title": "Wobble",
      "categories": ["wobble"]
    }
  ]
}"#;

fn load_catalog() -> Catalog {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(MANIFEST.as_bytes()).unwrap();
    Catalog::from_path(file.path()).unwrap()
}

#[test]
fn loads_manifest_in_title_order() {
    let catalog = load_catalog();
    let names: Vec<_> = catalog.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["click-hard", "click-soft", "explosion-big", "wobble"]);
}

#[test]
fn detail_view_fields() {
    let catalog = load_catalog();
    let entry = catalog.get("explosion-big").unwrap();

    assert_eq!(entry.broad_category, BroadCategory::Impact);
    assert_eq!(entry.author, "Kenney");
    assert_eq!(format_duration(entry.meta.duration), "1.23s");
    assert_eq!(format_size_kb(entry.meta.size_kb), "41KB");

    let defaults = catalog.get("wobble").unwrap();
    assert_eq!(defaults.broad_category, BroadCategory::Other);
    assert_eq!(defaults.meta.license, "Unknown");
    assert_eq!(defaults.author, "Unknown");
}

#[test]
fn browsing_flow_with_batch_install() {
    let catalog = load_catalog();
    let mut selection = BatchSelection::new();

    let ui = CategorySelection::Only(BroadCategory::Ui);
    selection.sync_filters("", ui);
    let visible = filter(catalog.entries(), "", &ui);
    assert_eq!(visible.len(), 2);

    for entry in &visible {
        selection.toggle(&entry.name);
    }
    let names = selection.ordered_names(catalog.entries());
    let command = build_install_command(&names, PackageManager::Pnpm).unwrap();
    assert_eq!(
        command,
        "pnpm dlx shadcn@latest add @soundcn/click-hard @soundcn/click-soft"
    );

    selection.sync_filters("boom", CategorySelection::All);
    assert!(selection.is_empty());
    let names = selection.ordered_names(catalog.entries());
    assert!(matches!(
        build_install_command(&names, PackageManager::Npm),
        Err(CatalogError::EmptySelection)
    ));
}

#[test]
fn facets_and_related() {
    let catalog = load_catalog();
    let facets = build_category_options(catalog.entries());
    let summary: Vec<_> = facets.iter().map(|f| (f.key.as_str(), f.count)).collect();
    assert_eq!(summary, vec![("all", 4), ("UI", 2), ("Impact", 1), ("Other", 1)]);

    let subject = catalog.get("click-soft").unwrap();
    let related = related_sounds(
        catalog.entries(),
        &subject.name,
        subject.broad_category,
        DEFAULT_RELATED_LIMIT,
    );
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].name, "click-hard");
}

#[test]
fn usage_snippet_for_catalog_entry() {
    let catalog = load_catalog();
    let snippet = build_usage_snippet(&catalog.get("explosion-big").unwrap().name);
    assert!(snippet.contains("import { explosionBigSound } from \"@/sounds/explosion-big\";"));
    assert!(snippet.ends_with("const [play] = useSound(explosionBigSound);"));
}

#[test]
fn malformed_manifest_is_an_error() {
    assert!(matches!(
        Catalog::from_json_str("{ not json"),
        Err(CatalogError::Manifest(_))
    ));
    assert!(matches!(
        Catalog::from_path(std::path::Path::new("/definitely/missing/registry.json")),
        Err(CatalogError::Io(_))
    ));
}
