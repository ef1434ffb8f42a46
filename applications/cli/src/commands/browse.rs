//! Catalog browsing: list, categories, detail view, install commands

use crate::error::{CliError, Result};
use soundcn_catalog::{
    build_category_options, build_install_command, build_usage_snippet, filter,
    format_duration, format_size_kb, registry_item_url, related_sounds, BatchSelection, Catalog,
    CategorySelection, PackageManager,
};
use soundcn_core::CatalogEntry;
use std::fmt::Write;

/// Filtered entries, one per line, followed by the visible count
pub fn render_list(catalog: &Catalog, query: &str, category: &str) -> Result<String> {
    let category: CategorySelection = category.parse()?;
    let visible = filter(catalog.entries(), query, &category);

    let mut out = String::new();
    for entry in &visible {
        let _ = writeln!(
            out,
            "{:<28} {:<28} {:<14} {:>7} {:>6}",
            entry.name,
            entry.title,
            entry.broad_category.label(),
            format_duration(entry.meta.duration),
            format_size_kb(entry.meta.size_kb),
        );
    }
    let _ = writeln!(out, "{}", count_label(visible.len()));
    Ok(out)
}

/// Category facets with entry counts, `All` first
pub fn render_categories(catalog: &Catalog) -> String {
    let mut out = String::new();
    for facet in build_category_options(catalog.entries()) {
        let _ = writeln!(out, "{:<16} {:>5}", facet.label, facet.count);
    }
    out
}

/// Detail view of one sound
pub fn render_detail(
    catalog: &Catalog,
    name: &str,
    pm: PackageManager,
    related_limit: usize,
) -> Result<String> {
    let entry = catalog
        .get(name)
        .ok_or_else(|| CliError::NotFound(name.to_string()))?;

    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", entry.title, entry.name);
    let _ = writeln!(out, "{}", metadata_line(entry));
    if !entry.description.is_empty() {
        let _ = writeln!(out, "\n{}", entry.description);
    }

    let _ = writeln!(out, "\nInstall:");
    let _ = writeln!(out, "  {}", build_install_command(&[entry.name.as_str()], pm)?);

    let _ = writeln!(out, "\nUsage:");
    for line in build_usage_snippet(&entry.name).lines() {
        let _ = writeln!(out, "  {}", line);
    }

    let _ = writeln!(out, "\nRegistry: {}", registry_item_url(&entry.name));

    let related = related_sounds(
        catalog.entries(),
        &entry.name,
        entry.broad_category,
        related_limit,
    );
    if !related.is_empty() {
        let _ = writeln!(out, "\nRelated:");
        for other in related {
            let _ = writeln!(out, "  {:<28} {}", other.name, other.title);
        }
    }

    Ok(out)
}

/// One install command for several sounds
///
/// Explicit `names` are installed in catalog order with duplicates dropped.
/// With no names, every entry visible under `query` and `category` is
/// installed (the "install all" action of a filtered view).
pub fn render_install(
    catalog: &Catalog,
    names: &[String],
    query: &str,
    category: &str,
    pm: PackageManager,
) -> Result<String> {
    let command = if names.is_empty() {
        let category: CategorySelection = category.parse()?;
        let visible: Vec<&str> = filter(catalog.entries(), query, &category)
            .into_iter()
            .map(|entry| entry.name.as_str())
            .collect();
        build_install_command(&visible, pm)?
    } else {
        let mut selection = BatchSelection::new();
        for name in names {
            if !catalog.contains(name) {
                return Err(CliError::NotFound(name.clone()));
            }
            if !selection.contains(name) {
                selection.toggle(name);
            }
        }
        build_install_command(&selection.ordered_names(catalog.entries()), pm)?
    };

    Ok(format!("{command}\n"))
}

fn metadata_line(entry: &CatalogEntry) -> String {
    format!(
        "{} · {} · {} · {} · {}",
        entry.broad_category.label(),
        format_duration(entry.meta.duration),
        format_size_kb(entry.meta.size_kb),
        entry.meta.license,
        entry.author,
    )
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 sound".to_string()
    } else {
        format!("{count} sounds")
    }
}
