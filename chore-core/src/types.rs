//! Domain types for the chore module registry.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! Registry entries are serializable via serde + serde_yaml and their field names
//! (`filename`, `location`, `constants`) are part of the on-disk contract.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// The user-chosen name under which an installed module is registered.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModuleAlias(pub String);

impl fmt::Display for ModuleAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ModuleAlias {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ModuleAlias {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl Borrow<str> for ModuleAlias {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The content-store object id an installed module is stored under.
///
/// Derived deterministically from `(source, alias)` at install time — not from
/// the module content. Identical content installed under two aliases is stored
/// twice, and the id does not detect content drift at the source location.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StoredId(pub String);

impl fmt::Display for StoredId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for StoredId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StoredId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Registry entry
// ---------------------------------------------------------------------------

/// One installed module, keyed in the registry by its alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    /// Content-store object id (file or directory name under the store root).
    pub filename: StoredId,
    /// Where the module was installed from — a path or URL. `None` means the
    /// module has no remembered origin and cannot be updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Namespace identifiers the module's content declares, extracted once at
    /// install time. Listings and relevance checks read these instead of
    /// re-scanning the stored file.
    #[serde(default)]
    pub constants: BTreeSet<String>,
}

impl ModuleEntry {
    /// Whether this entry declares the given namespace identifier.
    pub fn declares(&self, namespace_id: &str) -> bool {
        self.constants.contains(namespace_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
