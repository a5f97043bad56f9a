//! On-disk format compatibility tests for `chore.yml`.
//!
//! The field names `filename` / `location` / `constants` and the top-level
//! alias-keyed mapping are an interop contract with existing installs: these
//! tests pin the exact shape by reading hand-written files and inspecting
//! written output as raw YAML.

use std::collections::BTreeSet;

use assert_fs::prelude::*;
use predicates::prelude::*;

use chore_core::{registry, ModuleAlias, ModuleEntry, ModuleRegistry, RegistryError, StoredId};

// ---------------------------------------------------------------------------
// 1. Reading files produced by other implementations
// ---------------------------------------------------------------------------

#[test]
fn reads_hand_written_registry() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("chore.yml")
        .write_str(
            "devtools:\n  filename: 9c2f61aa\n  location: /src/devtools.chore\n  constants:\n    - devtools\n    - devtools:release\nmisc:\n  filename: 77ab01cd\n  location: https://example.com/misc.chore\n  constants: []\n",
        )
        .expect("write");

    let registry = ModuleRegistry::load_at(root.path()).expect("load");
    assert_eq!(registry.len(), 2);

    let devtools = registry.get("devtools").expect("devtools entry");
    assert_eq!(devtools.filename, StoredId::from("9c2f61aa"));
    assert_eq!(devtools.location.as_deref(), Some("/src/devtools.chore"));
    assert!(devtools.declares("devtools:release"));

    let misc = registry.get("misc").expect("misc entry");
    assert!(misc.constants.is_empty());
}

#[test]
fn corrupt_registry_reports_parse_error_with_path() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("chore.yml")
        .write_str(": : corrupt : yaml : !!!\n  - broken: [unclosed")
        .expect("write");

    let err = ModuleRegistry::load_at(root.path()).unwrap_err();
    assert!(matches!(err, RegistryError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("chore.yml"), "must name the file");
}

#[test]
fn wrong_shape_registry_reports_parse_error() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("chore.yml")
        .write_str("- this is a list, not a mapping\n")
        .expect("write");

    let err = ModuleRegistry::load_at(root.path()).unwrap_err();
    assert!(matches!(err, RegistryError::Parse { .. }), "got: {err}");
}

// ---------------------------------------------------------------------------
// 2. Written output keeps the contract field names
// ---------------------------------------------------------------------------

#[test]
fn written_registry_uses_contract_field_names() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let mut registry = ModuleRegistry::default();
    registry.set(
        ModuleAlias::from("devtools"),
        ModuleEntry {
            filename: StoredId::from("9c2f61aa"),
            location: Some("/src/devtools.chore".to_string()),
            constants: BTreeSet::from(["devtools".to_string()]),
        },
    );
    registry.save_at(root.path()).expect("save");

    root.child("chore.yml").assert(
        predicate::str::contains("devtools:")
            .and(predicate::str::contains("filename: 9c2f61aa"))
            .and(predicate::str::contains("location: /src/devtools.chore"))
            .and(predicate::str::contains("constants:")),
    );
}

#[test]
fn save_fully_overwrites_previous_contents() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("chore.yml")
        .write_str("stale:\n  filename: old\n  constants: []\n")
        .expect("write");

    let mut registry = ModuleRegistry::default();
    registry.set(
        ModuleAlias::from("fresh"),
        ModuleEntry {
            filename: StoredId::from("new"),
            location: None,
            constants: BTreeSet::new(),
        },
    );
    registry.save_at(root.path()).expect("save");

    let contents = std::fs::read_to_string(registry::registry_path_at(root.path())).unwrap();
    assert!(!contents.contains("stale"), "save must not merge: {contents}");
    assert!(contents.contains("fresh"));
}
