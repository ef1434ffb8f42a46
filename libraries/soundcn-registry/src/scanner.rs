//! Sound module discovery
//!
//! Builds the explicit slug -> module path table: every directory `<slug>`
//! directly under the sounds root that contains `<slug>/<slug>.ts`.

use crate::error::{RegistryError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of sound module files
pub const MODULE_EXTENSION: &str = "ts";

/// Slug -> module file table, ordered by slug
#[derive(Debug, Clone, Default)]
pub struct ModuleIndex {
    modules: BTreeMap<String, PathBuf>,
}

impl ModuleIndex {
    /// Scan a sounds directory
    ///
    /// Directories without a matching module file are skipped with a warning.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(RegistryError::SoundsDirNotFound(root.to_path_buf()));
        }

        let mut modules = BTreeMap::new();
        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Failed to read entry in {}: {}", root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            let Some(slug) = entry.file_name().to_str() else {
                tracing::warn!("Skipping non UTF-8 directory {}", entry.path().display());
                continue;
            };

            let module = module_path(root, slug);
            if !module.is_file() {
                tracing::warn!("Skipping {}: no {}.{} found", slug, slug, MODULE_EXTENSION);
                continue;
            }
            modules.insert(slug.to_string(), module);
        }

        tracing::debug!("Found {} sound modules in {}", modules.len(), root.display());
        Ok(Self { modules })
    }

    /// Module file for a slug
    pub fn get(&self, slug: &str) -> Option<&Path> {
        self.modules.get(slug).map(PathBuf::as_path)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.modules.contains_key(slug)
    }

    /// Slugs in sorted order
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// `(slug, module path)` pairs in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.modules
            .iter()
            .map(|(slug, path)| (slug.as_str(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// `<root>/<slug>/<slug>.ts`
pub fn module_path(root: &Path, slug: &str) -> PathBuf {
    root.join(slug)
        .join(format!("{}.{}", slug, MODULE_EXTENSION))
}
