//! soundcn - Registry
//!
//! Everything that touches the sound modules on disk:
//!
//! - `ModuleIndex`: slug -> `<slug>/<slug>.ts` table built by scanning the sounds root
//! - `SoundModule`: pattern-based field extraction from a module file
//! - `DirectoryAssetSource`: runtime asset lookup for playback and download
//! - `RegistryUpdater`: appends manifest entries for modules the manifest lacks
//!
//! # Example
//!
//! ```rust,no_run
//! use soundcn_registry::{RegistryUpdater, UpdateOutcome};
//! use std::path::Path;
//!
//! let updater = RegistryUpdater::new(
//!     Path::new("registry.json"),
//!     Path::new("registry/new-york/sounds"),
//! );
//! match updater.run(true).unwrap() {
//!     UpdateOutcome::UpToDate => println!("nothing to do"),
//!     UpdateOutcome::DryRun(additions) | UpdateOutcome::Written(additions) => {
//!         for addition in additions {
//!             println!("+ {}", addition.name);
//!         }
//!     }
//! }
//! ```

mod error;
pub mod module;
pub mod scanner;
mod source;
pub mod updater;

// Public exports
pub use error::{RegistryError, Result};
pub use module::SoundModule;
pub use scanner::ModuleIndex;
pub use source::DirectoryAssetSource;
pub use updater::{kebab_to_title, Addition, RegistryUpdater, UpdateOutcome, UpdatePlan};
