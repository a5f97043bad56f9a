//! Content-addressed storage of installed module bodies.
//!
//! # Storage layout
//!
//! ```text
//! ~/.chore/
//!   chore.yml       (registry — owned by [`crate::registry`])
//!   <stored-id>     (single-file module body)
//!   <stored-id>/    (directory module — entry point is main.chore inside)
//!     main.chore
//! ```
//!
//! # API pattern
//!
//! Every function takes an explicit `root: &Path`; [`store_root`] resolves the
//! real root from the environment. Tests always pass a `TempDir` root.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::RegistryError;
use crate::types::StoredId;

/// File name a directory-shaped object is entered through.
pub const TREE_ENTRY_POINT: &str = "main.chore";

// ---------------------------------------------------------------------------
// 1. Root resolution
// ---------------------------------------------------------------------------

/// The platform store root: `<base>/.chore`.
///
/// Base resolution order: `$HOME`; else `$HOMEDRIVE` + `$HOMEPATH`; else
/// `$APPDATA`; else the platform home directory; else the filesystem root.
pub fn store_root() -> PathBuf {
    base_dir(|name| env::var_os(name)).join(".chore")
}

fn base_dir(var: impl Fn(&str) -> Option<OsString>) -> PathBuf {
    if let Some(home) = var("HOME") {
        return PathBuf::from(home);
    }
    if let (Some(drive), Some(path)) = (var("HOMEDRIVE"), var("HOMEPATH")) {
        let mut base = PathBuf::from(drive);
        base.push(path);
        return base;
    }
    if let Some(appdata) = var("APPDATA") {
        return PathBuf::from(appdata);
    }
    dirs::home_dir().unwrap_or_else(|| {
        if cfg!(windows) {
            PathBuf::from("C:/")
        } else {
            PathBuf::from("/")
        }
    })
}

/// `<root>/<id>` — pure, no I/O.
pub fn object_path_at(root: &Path, id: &StoredId) -> PathBuf {
    root.join(&id.0)
}

// ---------------------------------------------------------------------------
// 2. Write / remove
// ---------------------------------------------------------------------------

/// Write (or overwrite) a single-file object. Creates the root if absent.
pub fn put_at(root: &Path, id: &StoredId, content: &str) -> Result<(), RegistryError> {
    std::fs::create_dir_all(root)?;
    std::fs::write(object_path_at(root, id), content)?;
    Ok(())
}

/// Recursively copy `source_dir` in as a directory-shaped object.
///
/// Any existing object under the same id is replaced, not merged.
pub fn put_tree_at(root: &Path, id: &StoredId, source_dir: &Path) -> Result<(), RegistryError> {
    std::fs::create_dir_all(root)?;
    let dest = object_path_at(root, id);
    remove_at(root, id)?;
    copy_dir_recursive(source_dir, &dest)?;
    Ok(())
}

/// Delete an object, file or tree. Idempotent: a missing object is not an error.
pub fn remove_at(root: &Path, id: &StoredId) -> Result<(), RegistryError> {
    let path = object_path_at(root, id);
    if !path.exists() {
        return Ok(());
    }
    if path.is_dir() {
        std::fs::remove_dir_all(&path)?;
    } else {
        std::fs::remove_file(&path)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// 3. Enumeration
// ---------------------------------------------------------------------------

/// Sorted direct children of the store root, with directory objects mapped to
/// their `main.chore` entry point. A missing root yields an empty list.
///
/// The registry file itself is included; discovery filters it out.
pub fn list_objects_at(root: &Path) -> Result<Vec<PathBuf>, RegistryError> {
    if !root.exists() {
        return Ok(vec![]);
    }
    let mut entries: Vec<_> = std::fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .collect();
    entries.sort_by_key(|e| e.file_name());

    Ok(entries
        .into_iter()
        .map(|e| {
            let path = e.path();
            if path.is_dir() {
                path.join(TREE_ENTRY_POINT)
            } else {
                path
            }
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn copy_dir_recursive(from: &Path, to: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(to)?;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let dest = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &dest)?;
        } else {
            std::fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
