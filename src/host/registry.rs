//! Per-account master category registry, persisted as TOML.
//!
//! Stands in for the mail client's account-level category list when
//! operating on local drafts. Lives in the cache directory next to the
//! log file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::host::MasterCategory;

/// The on-disk registry: a list of category name/color entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRegistry {
    pub categories: Vec<MasterCategory>,
}

impl CategoryRegistry {
    /// Load the registry, returning an empty one if the file does not
    /// exist or cannot be parsed.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<CategoryRegistry>(&contents) {
                Ok(registry) => registry,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to parse category registry, starting empty"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read category registry, starting empty"
                );
                Self::default()
            }
        }
    }

    /// Write the registry back to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), entries = self.categories.len(), "Saved category registry");
        Ok(())
    }

    /// Add entries not already present (by display name).
    pub fn merge(&mut self, new_entries: &[MasterCategory]) {
        for entry in new_entries {
            if !self
                .categories
                .iter()
                .any(|c| c.display_name == entry.display_name)
            {
                self.categories.push(entry.clone());
            }
        }
    }
}

/// Default registry location inside a cache directory.
pub fn registry_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join("categories.toml")
}
