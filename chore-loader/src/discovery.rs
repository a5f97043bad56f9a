//! Locating candidate task-definition files.
//!
//! Two independent strategies, combined by [`discover_at`]:
//!
//! 1. **System-wide** — every object in the content store, or, when a target
//!    namespace is given, only the stored files whose registry entries declare
//!    it ([`ModuleRegistry::relevant_to`]).
//! 2. **Project-local** — ascend from the working directory one level at a
//!    time, checking four fixed patterns per level, and stop at the first
//!    level that matches anything. A project-root file thereby fully shadows
//!    a parent monorepo's.
//!
//! System-wide results come first so that later-loaded project-local
//! definitions win in the shared namespace.

use std::path::{Path, PathBuf};

use chore_core::registry::{registry_path_at, ModuleRegistry};
use chore_core::store::{self, TREE_ENTRY_POINT};
use chore_core::RegistryError;

/// Conventionally-named single task file at a project root.
pub const PROJECT_FILE_NAME: &str = "Chorefile";

/// Extension of task-definition files.
pub const MODULE_EXTENSION: &str = "chore";

// ---------------------------------------------------------------------------
// Project-local search
// ---------------------------------------------------------------------------

/// The four fixed patterns checked at one directory level, in order:
/// `Chorefile`, `*.chore`, `tasks/*.chore`, `lib/tasks/*.chore`.
pub fn level_matches(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let project_file = dir.join(PROJECT_FILE_NAME);
    if project_file.is_file() {
        found.push(project_file);
    }
    found.extend(module_files_in(dir));
    found.extend(module_files_in(&dir.join("tasks")));
    found.extend(module_files_in(&dir.join("lib").join("tasks")));
    found
}

/// Ascend from `start` towards the filesystem root, returning the matches of
/// the first level that has any. Empty if no level matches.
pub fn project_files(start: &Path) -> Vec<PathBuf> {
    for dir in start.ancestors() {
        let matches = level_matches(dir);
        if !matches.is_empty() {
            return matches;
        }
    }
    Vec::new()
}

/// Sorted `*.chore` files directly inside `dir`; empty when `dir` is missing.
fn module_files_in(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == MODULE_EXTENSION))
        .collect();
    files.sort();
    files
}

// ---------------------------------------------------------------------------
// Combined discovery
// ---------------------------------------------------------------------------

/// Full discovery order for one run: system-wide entries first, then
/// project-local files from `start`. The registry's own persistence file is
/// excluded; directory-shaped objects resolve to their `main.chore`.
///
/// `target` narrows the system-wide side to the modules whose recorded
/// constants contain that namespace identifier, so a single task invocation
/// does not pay for loading every installed module.
pub fn discover_at(
    root: &Path,
    registry: &ModuleRegistry,
    start: &Path,
    target: Option<&str>,
) -> Result<Vec<PathBuf>, RegistryError> {
    let mut files = match target {
        Some(namespace_id) => registry
            .relevant_to(namespace_id)
            .into_iter()
            .map(|(_, entry)| store::object_path_at(root, &entry.filename))
            .collect(),
        None => store::list_objects_at(root)?,
    };
    files.extend(project_files(start));

    let registry_file = registry_path_at(root);
    files.retain(|path| path != &registry_file);

    Ok(files
        .into_iter()
        .map(|path| {
            if path.is_dir() {
                path.join(TREE_ENTRY_POINT)
            } else {
                path
            }
        })
        .collect())
}
