//! Install / uninstall / update operations.
//!
//! The stored id is a digest of `(source, alias)` — not of content. Installing
//! the same alias from the same location always lands on the same object;
//! installing identical content under two aliases stores it twice. The digest
//! therefore cannot detect content drift at the source; `update` exists for
//! that.

use std::path::Path;

use sha2::{Digest, Sha256};

use chore_core::registry::ModuleRegistry;
use chore_core::store;
use chore_core::types::{ModuleAlias, ModuleEntry, StoredId};

use crate::collaborators::{ContentInspector, Prompter};
use crate::error::LifecycleError;
use crate::fetch::{self, Payload};

/// Options accepted by `chore install`.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Explicit alias (`--as`). When absent the magic comment and then the
    /// prompt are consulted.
    pub alias: Option<String>,
    /// Record `source` verbatim as the origin instead of absolutizing it.
    pub relative: bool,
}

/// Result of an install attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The user declined the confirmation; nothing was touched.
    Declined,
    /// Committed under this stored id.
    Installed(StoredId),
}

/// Deterministic stored id for an `(source, alias)` pair.
pub fn stored_id_for(source: &str, alias: &str) -> StoredId {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    hasher.update(alias.as_bytes());
    StoredId::from(hex::encode(hasher.finalize()))
}

/// Alias declared by a `# module: <name>` comment on the first line.
pub fn alias_from_magic_comment(content: &str) -> Option<String> {
    let first_line = content.lines().next()?;
    let name = first_line
        .trim_start()
        .strip_prefix('#')?
        .trim_start()
        .strip_prefix("module:")?
        .trim();
    (!name.is_empty()).then(|| name.to_string())
}

// ---------------------------------------------------------------------------
// install
// ---------------------------------------------------------------------------

/// Install `source` into the store rooted at `root`.
///
/// Flow: fetch → confirm → resolve alias → extract namespace ids → persist the
/// registry entry → commit the object. The entry is persisted *before* the
/// object body: a crash in between leaves an entry pointing at a missing
/// object, which re-running install repairs. (The reverse order would leave an
/// unreferenced object nothing can detect.)
pub fn install_at(
    root: &Path,
    source: &str,
    options: InstallOptions,
    prompter: &mut dyn Prompter,
    inspector: &dyn ContentInspector,
) -> Result<InstallOutcome, LifecycleError> {
    let fetched = fetch::fetch(source)?;

    if !prompter
        .confirm_install(source, &fetched.content)
        .map_err(LifecycleError::Prompt)?
    {
        tracing::debug!("install of '{source}' declined");
        return Ok(InstallOutcome::Declined);
    }

    let alias = resolve_alias(source, &options, &fetched.content, prompter)?;
    let constants = inspector.namespace_ids(&fetched.content, &fetched.display_path);
    let id = stored_id_for(source, &alias);

    let mut registry = ModuleRegistry::load_at(root)?;
    registry.set(
        ModuleAlias::from(alias.as_str()),
        ModuleEntry {
            filename: id.clone(),
            location: Some(recorded_location(source, options.relative)),
            constants,
        },
    );
    registry.save_at(root)?;

    match fetched.payload {
        Payload::File => store::put_at(root, &id, &fetched.content)?,
        Payload::Tree { dir } => store::put_tree_at(root, &id, &dir)?,
    }

    tracing::debug!("installed '{alias}' as {id}");
    Ok(InstallOutcome::Installed(id))
}

fn resolve_alias(
    source: &str,
    options: &InstallOptions,
    content: &str,
    prompter: &mut dyn Prompter,
) -> Result<String, LifecycleError> {
    if let Some(alias) = &options.alias {
        return Ok(alias.clone());
    }
    if let Some(alias) = alias_from_magic_comment(content) {
        return Ok(alias);
    }
    let answer = prompter.prompt_alias(source).map_err(LifecycleError::Prompt)?;
    let answer = answer.trim();
    Ok(if answer.is_empty() {
        source.to_string()
    } else {
        answer.to_string()
    })
}

/// The origin to remember for updates: `source` verbatim when `--relative`,
/// when it is a URL, or when it is already absolute; otherwise absolutized.
fn recorded_location(source: &str, relative: bool) -> String {
    if relative || fetch::is_remote(source) || Path::new(source).is_absolute() {
        return source.to_string();
    }
    std::path::absolute(source)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| source.to_string())
}

// ---------------------------------------------------------------------------
// uninstall
// ---------------------------------------------------------------------------

/// Remove the stored object and registry entry for `alias`, then persist.
///
/// Fails with `AliasNotFound` — and makes no filesystem changes — when the
/// alias is not registered. A missing stored object is not an error.
pub fn uninstall_at(root: &Path, alias: &str) -> Result<(), LifecycleError> {
    let mut registry = ModuleRegistry::load_at(root)?;
    let entry = registry.remove(alias).ok_or_else(|| LifecycleError::AliasNotFound {
        alias: alias.to_string(),
    })?;

    store::remove_at(root, &entry.filename)?;
    registry.save_at(root)?;
    tracing::debug!("uninstalled '{alias}'");
    Ok(())
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

/// Re-install `alias` from its recorded origin.
///
/// Fails with `AliasNotFound` when the alias is absent or has no recorded
/// location (a locally-authored module with no remembered origin cannot be
/// refreshed). When the fresh install lands on a different stored id — only
/// possible if the recorded location differs from the original install's
/// source string — the superseded object is removed after the new one is
/// committed. A declined confirmation leaves everything untouched.
pub fn update_at(
    root: &Path,
    alias: &str,
    prompter: &mut dyn Prompter,
    inspector: &dyn ContentInspector,
) -> Result<(), LifecycleError> {
    let registry = ModuleRegistry::load_at(root)?;
    let not_found = || LifecycleError::AliasNotFound {
        alias: alias.to_string(),
    };
    let entry = registry.get(alias).ok_or_else(not_found)?;
    let location = entry.location.clone().ok_or_else(not_found)?;
    let previous = entry.filename.clone();

    let options = InstallOptions {
        alias: Some(alias.to_string()),
        relative: false,
    };
    match install_at(root, &location, options, prompter, inspector)? {
        InstallOutcome::Declined => Ok(()),
        InstallOutcome::Installed(new_id) => {
            if new_id != previous {
                store::remove_at(root, &previous)?;
            }
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_id_is_deterministic() {
        let a = stored_id_for("/src/tools.chore", "tools");
        let b = stored_id_for("/src/tools.chore", "tools");
        assert_eq!(a, b);
    }

    #[test]
    fn stored_id_differs_per_alias_and_source() {
        let base = stored_id_for("/src/tools.chore", "tools");
        assert_ne!(base, stored_id_for("/src/tools.chore", "other"));
        assert_ne!(base, stored_id_for("/elsewhere/tools.chore", "tools"));
    }

    #[test]
    fn magic_comment_on_first_line() {
        assert_eq!(
            alias_from_magic_comment("# module: devtools\ntask x\n"),
            Some("devtools".to_string())
        );
        assert_eq!(
            alias_from_magic_comment("  #  module:   spaced  \n"),
            Some("spaced".to_string())
        );
    }

    #[test]
    fn magic_comment_ignored_when_absent_or_misplaced() {
        assert_eq!(alias_from_magic_comment("task x\n# module: late\n"), None);
        assert_eq!(alias_from_magic_comment("# modules: typo\n"), None);
        assert_eq!(alias_from_magic_comment("# module:\n"), None);
        assert_eq!(alias_from_magic_comment(""), None);
    }

    #[test]
    fn recorded_location_keeps_relative_flag_urls_and_absolutes() {
        assert_eq!(recorded_location("tasks/x.chore", true), "tasks/x.chore");
        assert_eq!(
            recorded_location("https://example.com/x.chore", false),
            "https://example.com/x.chore"
        );
        assert_eq!(recorded_location("/abs/x.chore", false), "/abs/x.chore");
    }

    #[test]
    fn recorded_location_absolutizes_plain_relative_paths() {
        let recorded = recorded_location("tasks/x.chore", false);
        assert!(Path::new(&recorded).is_absolute(), "got: {recorded}");
        assert!(recorded.ends_with("tasks/x.chore"));
    }
}
