//! Install command and usage snippet generation
//!
//! Pure string templating. The package manager set is closed: anything else is
//! rejected instead of quietly falling back to npm.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registry namespace sounds are installed from
pub const REGISTRY_NAMESPACE: &str = "@soundcn";

/// Base URL of the hosted registry
pub const REGISTRY_BASE_URL: &str = "https://soundcn.dev";

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Every supported package manager
    pub const ALL: [PackageManager; 4] = [Self::Npm, Self::Pnpm, Self::Yarn, Self::Bun];

    /// Command prefix that runs the shadcn CLI
    pub fn install_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npx shadcn@latest",
            PackageManager::Pnpm => "pnpm dlx shadcn@latest",
            PackageManager::Yarn => "yarn shadcn@latest",
            PackageManager::Bun => "bunx --bun shadcn@latest",
        }
    }

    /// Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|pm| pm.as_str() == s.trim())
            .ok_or_else(|| CatalogError::UnknownPackageManager(s.to_string()))
    }
}

/// One command installing every named sound
///
/// `npx shadcn@latest add @soundcn/click-soft @soundcn/zap`
pub fn build_install_command<S: AsRef<str>>(names: &[S], pm: PackageManager) -> Result<String> {
    if names.is_empty() {
        return Err(CatalogError::EmptySelection);
    }

    let mut command = format!("{} add", pm.install_prefix());
    for name in names {
        command.push(' ');
        command.push_str(REGISTRY_NAMESPACE);
        command.push('/');
        command.push_str(name.as_ref());
    }
    Ok(command)
}

/// Hosted registry item for a sound
pub fn registry_item_url(name: &str) -> String {
    format!("{REGISTRY_BASE_URL}/r/{name}.json")
}

/// Identifier the generated sound module exports
///
/// `click-soft` -> `clickSoftSound`. A hyphen is dropped only when followed by
/// an ASCII lowercase letter or digit, which is upper-cased; everything else is
/// kept verbatim.
pub fn export_name(name: &str) -> String {
    let mut camel = String::with_capacity(name.len() + 5);
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() || next.is_ascii_digit() {
                    camel.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        camel.push(c);
    }

    camel.push_str("Sound");
    camel
}

/// Usage code shown under the install command
pub fn build_usage_snippet(name: &str) -> String {
    let export = export_name(name);
    format!(
        "import {{ useSound }} from \"@/hooks/use-sound\";\n\
         import {{ {export} }} from \"@/sounds/{name}\";\n\
         \n\
         const [play] = useSound({export});"
    )
}
