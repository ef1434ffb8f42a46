//! Registry manifest maintenance
//!
//! Compares the sound modules on disk with `registry.json` and appends an
//! item for every module the manifest does not list yet. The manifest is
//! handled as untyped JSON so fields this crate does not know about survive
//! the rewrite untouched and in their original order.

use crate::error::{RegistryError, Result};
use crate::module::{SoundModule, DEFAULT_AUTHOR};
use crate::scanner::{ModuleIndex, MODULE_EXTENSION};
use serde::Serialize;
use serde_json::Value;
use soundcn_core::BLOCK_ITEM_TYPE;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Category used for names with no usable first word
pub const FALLBACK_CATEGORY: &str = "sound";

/// Registry dependency every sound item installs alongside
pub const USE_SOUND_DEPENDENCY: &str = "use-sound";

/// Homepage appended to the default author's credit
const DEFAULT_AUTHOR_URL: &str = "https://kenney.nl";

/// A manifest item about to be added
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Addition {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub title: String,
    pub description: String,
    pub files: Vec<ItemFile>,
    pub categories: Vec<String>,
    pub author: String,
    pub meta: AdditionMeta,
    pub registry_dependencies: Vec<String>,
}

/// `files[]` entry pointing at the sound module
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemFile {
    pub path: String,
    #[serde(rename = "type")]
    pub file_type: String,
}

/// `meta` object of an added item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionMeta {
    pub duration: f64,
    pub format: String,
    pub size_kb: u32,
    pub license: String,
    pub tags: Vec<String>,
}

impl Addition {
    /// One-line description: `name (3KB, 0.18s)`
    pub fn summary(&self) -> String {
        format!(
            "{} ({}KB, {:.2}s)",
            self.name, self.meta.size_kb, self.meta.duration
        )
    }
}

/// Result of scanning: the parsed manifest plus the items it lacks
#[derive(Debug, Clone)]
pub struct UpdatePlan {
    manifest: Value,
    pub additions: Vec<Addition>,
}

impl UpdatePlan {
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty()
    }
}

/// What `RegistryUpdater::run` did
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Every module already has a manifest item
    UpToDate,
    /// Nothing written; these items would have been added
    DryRun(Vec<Addition>),
    /// These items were appended and the manifest rewritten
    Written(Vec<Addition>),
}

/// Keeps `registry.json` in step with the sounds directory
#[derive(Debug, Clone)]
pub struct RegistryUpdater {
    manifest_path: PathBuf,
    sounds_dir: PathBuf,
}

impl RegistryUpdater {
    pub fn new(manifest_path: &Path, sounds_dir: &Path) -> Self {
        Self {
            manifest_path: manifest_path.to_path_buf(),
            sounds_dir: sounds_dir.to_path_buf(),
        }
    }

    /// Scan modules and compute the missing items without writing anything
    pub fn plan(&self) -> Result<UpdatePlan> {
        let text = std::fs::read_to_string(&self.manifest_path)?;
        let manifest: Value = serde_json::from_str(&text)?;

        let existing: HashSet<String> = manifest
            .get("items")
            .and_then(Value::as_array)
            .ok_or_else(|| RegistryError::InvalidManifest("missing \"items\" array".to_string()))?
            .iter()
            .filter_map(|item| item.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect();

        let index = ModuleIndex::scan(&self.sounds_dir)?;
        let mut additions = Vec::new();

        for (slug, path) in index.iter() {
            if existing.contains(slug) {
                continue;
            }

            let module = SoundModule::parse(&std::fs::read_to_string(path)?);
            if !module.has_name() {
                tracing::warn!("Skipping {}: could not parse name", slug);
                continue;
            }

            additions.push(self.build_addition(slug, &module));
        }

        Ok(UpdatePlan {
            manifest,
            additions,
        })
    }

    /// Append the planned items and rewrite the manifest
    ///
    /// Output is pretty-printed with two-space indentation and a trailing newline.
    pub fn apply(&self, plan: UpdatePlan) -> Result<Vec<Addition>> {
        let UpdatePlan {
            mut manifest,
            additions,
        } = plan;

        let items = manifest
            .get_mut("items")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| RegistryError::InvalidManifest("missing \"items\" array".to_string()))?;
        for addition in &additions {
            items.push(serde_json::to_value(addition)?);
        }

        let mut text = serde_json::to_string_pretty(&manifest)?;
        text.push('\n');
        std::fs::write(&self.manifest_path, text)?;

        Ok(additions)
    }

    /// Plan, then either report (`dry_run`) or apply
    pub fn run(&self, dry_run: bool) -> Result<UpdateOutcome> {
        let plan = self.plan()?;

        if plan.is_empty() {
            tracing::info!("Registry is up to date, no new sounds found");
            return Ok(UpdateOutcome::UpToDate);
        }

        if dry_run {
            tracing::info!("Dry run: would add {} new items", plan.additions.len());
            return Ok(UpdateOutcome::DryRun(plan.additions));
        }

        let additions = self.apply(plan)?;
        tracing::info!(
            "Added {} new sounds to {}",
            additions.len(),
            self.manifest_path.display()
        );
        Ok(UpdateOutcome::Written(additions))
    }

    fn build_addition(&self, slug: &str, module: &SoundModule) -> Addition {
        let title = kebab_to_title(slug);
        let tags = kebab_to_tags(slug);

        Addition {
            name: slug.to_string(),
            item_type: BLOCK_ITEM_TYPE.to_string(),
            description: format!("{} sound effect.", title),
            files: vec![ItemFile {
                path: self.module_file_entry(slug),
                file_type: "registry:lib".to_string(),
            }],
            categories: categories_from_name(slug),
            author: author_credit(&module.author),
            meta: AdditionMeta {
                duration: module.duration,
                format: module.format.clone(),
                size_kb: module.size_kb(),
                license: module.license.clone(),
                tags,
            },
            registry_dependencies: vec![USE_SOUND_DEPENDENCY.to_string()],
            title,
        }
    }

    /// Module path as written into `files[].path`: relative to the manifest's
    /// directory when possible, always with `/` separators
    fn module_file_entry(&self, slug: &str) -> String {
        let base = self
            .manifest_path
            .parent()
            .and_then(|parent| self.sounds_dir.strip_prefix(parent).ok())
            .unwrap_or(&self.sounds_dir);

        let mut parts: Vec<String> = base
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        parts.push(slug.to_string());
        parts.push(format!("{}.{}", slug, MODULE_EXTENSION));
        parts.join("/")
    }
}

/// `click-soft` -> `Click Soft`
pub fn kebab_to_title(kebab: &str) -> String {
    kebab
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Non-empty kebab parts
pub fn kebab_to_tags(kebab: &str) -> Vec<String> {
    kebab
        .split('-')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// First kebab part, or `sound`
pub fn categories_from_name(name: &str) -> Vec<String> {
    let first = kebab_to_tags(name)
        .into_iter()
        .next()
        .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());
    vec![first]
}

fn author_credit(author: &str) -> String {
    if author == DEFAULT_AUTHOR {
        format!("{} <{}>", author, DEFAULT_AUTHOR_URL)
    } else {
        author.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_capitalize_each_part() {
        assert_eq!(kebab_to_title("click-soft"), "Click Soft");
        assert_eq!(kebab_to_title("ui-8bit-coin"), "Ui 8bit Coin");
        assert_eq!(kebab_to_title("zap"), "Zap");
    }

    #[test]
    fn tags_drop_empty_parts() {
        assert_eq!(kebab_to_tags("door--open"), vec!["door", "open"]);
        assert!(kebab_to_tags("").is_empty());
    }

    #[test]
    fn category_is_first_word_or_fallback() {
        assert_eq!(categories_from_name("explosion-big"), vec!["explosion"]);
        assert_eq!(categories_from_name("-"), vec![FALLBACK_CATEGORY]);
    }

    #[test]
    fn only_default_author_gets_homepage() {
        assert_eq!(author_credit("Kenney"), "Kenney <https://kenney.nl>");
        assert_eq!(author_credit("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn module_entry_is_relative_to_manifest() {
        let updater = RegistryUpdater::new(
            Path::new("/site/registry.json"),
            Path::new("/site/registry/new-york/sounds"),
        );
        assert_eq!(
            updater.module_file_entry("zap"),
            "registry/new-york/sounds/zap/zap.ts"
        );

        let relative = RegistryUpdater::new(
            Path::new("registry.json"),
            Path::new("registry/new-york/sounds"),
        );
        assert_eq!(
            relative.module_file_entry("zap"),
            "registry/new-york/sounds/zap/zap.ts"
        );
    }

    #[test]
    fn summary_formats_size_and_duration() {
        let updater = RegistryUpdater::new(Path::new("registry.json"), Path::new("sounds"));
        let module = SoundModule::parse(r#"{ name: "coin", duration: 0.5 }"#);
        let addition = updater.build_addition("coin", &module);
        assert_eq!(addition.summary(), "coin (0KB, 0.50s)");
        assert_eq!(addition.author, "Kenney <https://kenney.nl>");
        assert_eq!(addition.registry_dependencies, vec![USE_SOUND_DEPENDENCY]);
    }
}
