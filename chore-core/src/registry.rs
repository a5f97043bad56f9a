//! Persistent alias → module mapping, backed by `<store-root>/chore.yml`.
//!
//! # On-disk shape
//!
//! One YAML mapping per store root; field names are the interop contract:
//!
//! ```yaml
//! devtools:
//!   filename: 9c2f61…          # content-store object id
//!   location: /src/devtools.chore
//!   constants:
//!     - devtools
//! ```
//!
//! # Concurrency
//!
//! `save_at` fully overwrites the file; there is no merge with concurrent
//! external changes and no lock. Callers must `load_at` immediately before a
//! mutate/save cycle — two racing processes are last-writer-wins.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::types::{ModuleAlias, ModuleEntry};

/// Registry file name under the store root.
pub const REGISTRY_FILE_NAME: &str = "chore.yml";

/// `<root>/chore.yml` — pure, no I/O.
pub fn registry_path_at(root: &Path) -> PathBuf {
    root.join(REGISTRY_FILE_NAME)
}

/// In-memory registry: an ordered mapping from alias to installed module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleRegistry {
    entries: BTreeMap<ModuleAlias, ModuleEntry>,
}

impl ModuleRegistry {
    /// Read the registry from `<root>/chore.yml`.
    ///
    /// A missing or empty file yields an empty registry, never an error.
    /// Malformed YAML is `RegistryError::Parse` with the offending path.
    pub fn load_at(root: &Path) -> Result<Self, RegistryError> {
        let path = registry_path_at(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents).map_err(|e| RegistryError::Parse { path, source: e })
    }

    /// Atomically overwrite `<root>/chore.yml` with the full in-memory mapping.
    ///
    /// Write flow: serialize → `.yml.tmp` sibling → `rename`. The `.tmp` lives
    /// in the same directory as the target (same filesystem — no EXDEV).
    /// Creates the store root if absent.
    pub fn save_at(&self, root: &Path) -> Result<(), RegistryError> {
        std::fs::create_dir_all(root)?;
        let path = registry_path_at(root);
        let tmp_path = path.with_extension("yml.tmp");

        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(&tmp_path, yaml)?;
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    pub fn get(&self, alias: &str) -> Option<&ModuleEntry> {
        self.entries.get(alias)
    }

    /// Insert or replace the entry for `alias` in the in-memory copy.
    pub fn set(&mut self, alias: ModuleAlias, entry: ModuleEntry) {
        self.entries.insert(alias, entry);
    }

    /// Remove `alias` from the in-memory copy, returning the old entry.
    pub fn remove(&mut self, alias: &str) -> Option<ModuleEntry> {
        self.entries.remove(alias)
    }

    /// Every entry whose recorded constants contain `namespace_id`, in alias
    /// order. This is what lets a single task invocation avoid loading every
    /// installed module.
    pub fn relevant_to(&self, namespace_id: &str) -> Vec<(&ModuleAlias, &ModuleEntry)> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.declares(namespace_id))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ModuleAlias, &ModuleEntry)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
