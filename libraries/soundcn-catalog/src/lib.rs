//! soundcn - Catalog
//!
//! Everything the browsing surfaces compute from the static manifest:
//!
//! - Catalog model (normalization, default-value policy, title ordering, slug index)
//! - Search and category filtering with facet counts
//! - Related-sounds resolution
//! - Install command and usage snippet generation
//! - Batch selection for multi-sound installs
//!
//! All functions here are pure over their inputs and cheap enough to run on
//! every keystroke for catalogs of a few hundred entries (linear scans, no
//! index beyond the slug map).
//!
//! # Example
//!
//! ```rust
//! use soundcn_catalog::{build_category_options, filter, Catalog, CategorySelection};
//!
//! let catalog = Catalog::from_json_str(r#"{"items": [
//!     {"name": "click-soft", "type": "registry:block", "title": "Click Soft", "categories": ["click"]},
//!     {"name": "explosion-big", "type": "registry:block", "title": "Explosion Big", "categories": ["explosion"]}
//! ]}"#).unwrap();
//!
//! let visible = filter(catalog.entries(), "exp", &CategorySelection::All);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].name, "explosion-big");
//!
//! let facets = build_category_options(catalog.entries());
//! assert_eq!(facets[0].key, "all");
//! assert_eq!(facets[0].count, 2);
//! ```

mod catalog;
mod error;
pub mod filter;
pub mod format;
pub mod related;
pub mod selection;
pub mod snippet;

// Public exports
pub use catalog::{build_catalog, compare_titles, Catalog};
pub use error::{CatalogError, Result};
pub use filter::{build_category_options, filter, CategoryFacet, CategorySelection, ALL_CATEGORY};
pub use format::{format_duration, format_size_kb};
pub use related::{related_sounds, DEFAULT_RELATED_LIMIT};
pub use selection::BatchSelection;
pub use snippet::{
    build_install_command, build_usage_snippet, export_name, registry_item_url, PackageManager,
};
