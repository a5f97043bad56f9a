//! Discovery behavior: ascension stop, ordering, narrowing, exclusions.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use chore_core::registry::registry_path_at;
use chore_core::store::TREE_ENTRY_POINT;
use chore_core::{ModuleAlias, ModuleEntry, ModuleRegistry, StoredId};
use chore_loader::discovery::{discover_at, project_files};

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "# chore file\n").unwrap();
}

fn entry(id: &str, constants: &[&str]) -> ModuleEntry {
    ModuleEntry {
        filename: StoredId::from(id),
        location: Some(format!("/src/{id}.chore")),
        constants: constants.iter().map(|c| c.to_string()).collect::<BTreeSet<_>>(),
    }
}

// ---------------------------------------------------------------------------
// 1. Project-local ascension
// ---------------------------------------------------------------------------

#[test]
fn ascension_stops_at_first_level_with_any_match() {
    let tree = TempDir::new().unwrap();
    // Grandparent has a Chorefile; the project dir has tasks/*.chore.
    touch(&tree.path().join("Chorefile"));
    let project = tree.path().join("mono").join("app");
    touch(&project.join("tasks").join("build.chore"));

    let found = project_files(&project);
    assert_eq!(found, vec![project.join("tasks").join("build.chore")]);
}

#[test]
fn ascension_climbs_past_empty_levels() {
    let tree = TempDir::new().unwrap();
    touch(&tree.path().join("Chorefile"));
    let nested = tree.path().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    let found = project_files(&nested);
    assert_eq!(found, vec![tree.path().join("Chorefile")]);
}

#[test]
fn all_four_patterns_match_at_one_level() {
    let tree = TempDir::new().unwrap();
    let root = tree.path();
    touch(&root.join("Chorefile"));
    touch(&root.join("local.chore"));
    touch(&root.join("tasks").join("db.chore"));
    touch(&root.join("lib").join("tasks").join("ci.chore"));
    touch(&root.join("tasks").join("README.md")); // wrong extension, ignored

    let found = project_files(root);
    assert_eq!(
        found,
        vec![
            root.join("Chorefile"),
            root.join("local.chore"),
            root.join("tasks").join("db.chore"),
            root.join("lib").join("tasks").join("ci.chore"),
        ]
    );
}

#[test]
fn no_match_up_to_root_yields_empty() {
    let tree = TempDir::new().unwrap();
    let nested = tree.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    // Only guaranteed empty below the tempdir; a stray Chorefile in / would be
    // pathological enough to ignore.
    assert!(project_files(&nested)
        .iter()
        .all(|p| !p.starts_with(tree.path())));
}

// ---------------------------------------------------------------------------
// 2. Combined discovery
// ---------------------------------------------------------------------------

#[test]
fn system_wide_results_come_before_project_local() {
    let store = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    touch(&store.path().join("aa11"));
    touch(&project.path().join("Chorefile"));

    let registry = ModuleRegistry::default();
    let found = discover_at(store.path(), &registry, project.path(), None).unwrap();
    assert_eq!(
        found,
        vec![store.path().join("aa11"), project.path().join("Chorefile")]
    );
}

#[test]
fn registry_file_is_excluded_from_discovery() {
    let store = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    touch(&store.path().join("aa11"));
    touch(&project.path().join("Chorefile"));
    fs::write(registry_path_at(store.path()), "").unwrap();

    let registry = ModuleRegistry::default();
    let found = discover_at(store.path(), &registry, project.path(), None).unwrap();
    assert_eq!(
        found,
        vec![store.path().join("aa11"), project.path().join("Chorefile")]
    );
}

#[test]
fn target_namespace_narrows_to_relevant_entries() {
    let store = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    touch(&store.path().join("id-web"));
    touch(&store.path().join("id-db"));
    touch(&project.path().join("Chorefile"));

    let mut registry = ModuleRegistry::default();
    registry.set(ModuleAlias::from("web"), entry("id-web", &["app"]));
    registry.set(ModuleAlias::from("db"), entry("id-db", &["db"]));

    let found = discover_at(store.path(), &registry, project.path(), Some("app")).unwrap();
    assert_eq!(
        found,
        vec![store.path().join("id-web"), project.path().join("Chorefile")]
    );

    let none = discover_at(store.path(), &registry, project.path(), Some("missing")).unwrap();
    let from_store: Vec<PathBuf> =
        none.into_iter().filter(|p| p.starts_with(store.path())).collect();
    assert!(from_store.is_empty(), "no store objects for an unknown namespace");
}

#[test]
fn directory_objects_resolve_to_entry_point() {
    let store = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    touch(&store.path().join("treeid").join(TREE_ENTRY_POINT));
    touch(&project.path().join("Chorefile"));

    let mut registry = ModuleRegistry::default();
    registry.set(ModuleAlias::from("pack"), entry("treeid", &["pack"]));

    let found = discover_at(store.path(), &registry, project.path(), Some("pack")).unwrap();
    assert_eq!(
        found,
        vec![
            store.path().join("treeid").join(TREE_ENTRY_POINT),
            project.path().join("Chorefile"),
        ]
    );
}
