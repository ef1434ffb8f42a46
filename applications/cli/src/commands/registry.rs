//! `update-registry`: add manifest items for new sound modules

use crate::config::AppConfig;
use crate::error::Result;
use soundcn_registry::{RegistryUpdater, UpdateOutcome};
use std::fmt::Write;

/// Run the registry update and render its report
pub fn update_registry(config: &AppConfig, dry_run: bool) -> Result<String> {
    let updater = RegistryUpdater::new(&config.catalog.manifest_path, &config.catalog.sounds_dir);

    let mut out = String::new();
    match updater.run(dry_run)? {
        UpdateOutcome::UpToDate => {
            let _ = writeln!(out, "Registry is up to date, no new sounds found.");
        }
        UpdateOutcome::DryRun(additions) => {
            let _ = writeln!(out, "Dry run: would add {} new items:", additions.len());
            for addition in &additions {
                let _ = writeln!(out, "  + {}", addition.summary());
            }
        }
        UpdateOutcome::Written(additions) => {
            let _ = writeln!(
                out,
                "Added {} new sounds to {}:",
                additions.len(),
                config.catalog.manifest_path.display()
            );
            for addition in &additions {
                let _ = writeln!(out, "  + {}", addition.summary());
            }
        }
    }
    Ok(out)
}
