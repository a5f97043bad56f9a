//! The shared task namespace.
//!
//! Each loaded file contributes named task descriptors, inserted into one
//! process-wide collection keyed by qualified name (`<namespace>:<task>`).
//! Insertion is last-write-wins, so a file loaded later can redefine a task
//! of the same qualified name — project-local files rely on this to shadow
//! system-wide ones.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// A single task descriptor produced by evaluating a task-definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDef {
    /// Bare task name (the part after the colon).
    pub name: String,
    /// Namespace identifier the task is grouped under.
    pub namespace: String,
    /// Human-readable description shown in listings.
    pub description: String,
    /// Absolute path of the file that defined this task.
    pub source: PathBuf,
}

impl TaskDef {
    /// `<namespace>:<name>` — the key tasks are registered and looked up by.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace, self.name)
    }
}

/// Process-wide indexed task collection. Explicitly constructed and passed
/// around; never ambient state.
#[derive(Debug, Default)]
pub struct Namespace {
    tasks: BTreeMap<String, TaskDef>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task under its qualified name. Replaces any earlier
    /// registration of the same name.
    pub fn register(&mut self, task: TaskDef) {
        self.tasks.insert(task.qualified_name(), task);
    }

    /// Look up a task by qualified name.
    pub fn get(&self, qualified_name: &str) -> Option<&TaskDef> {
        self.tasks.get(qualified_name)
    }

    /// All tasks, ordered by qualified name.
    pub fn tasks(&self) -> impl Iterator<Item = &TaskDef> {
        self.tasks.values()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(ns: &str, name: &str, desc: &str) -> TaskDef {
        TaskDef {
            name: name.to_string(),
            namespace: ns.to_string(),
            description: desc.to_string(),
            source: PathBuf::from("/tmp/test.chore"),
        }
    }

    #[test]
    fn qualified_name_joins_with_colon() {
        assert_eq!(task("app", "deploy", "").qualified_name(), "app:deploy");
    }

    #[test]
    fn later_registration_wins() {
        let mut ns = Namespace::new();
        ns.register(task("app", "deploy", "old"));
        ns.register(task("app", "deploy", "new"));
        assert_eq!(ns.len(), 1);
        assert_eq!(ns.get("app:deploy").unwrap().description, "new");
    }

    #[test]
    fn tasks_iterate_in_name_order() {
        let mut ns = Namespace::new();
        ns.register(task("b", "x", ""));
        ns.register(task("a", "y", ""));
        let names: Vec<String> = ns.tasks().map(|t| t.qualified_name()).collect();
        assert_eq!(names, vec!["a:y", "b:x"]);
    }
}
