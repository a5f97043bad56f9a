//! Reference implementation of the task-DSL collaborators.
//!
//! Chore files are line-based:
//!
//! ```text
//! # module: devtools
//! namespace devtools
//!
//! desc "say hello"
//! task greet
//! ```
//!
//! `namespace <id>` switches the current group (tasks before any directive
//! land in `default`), `desc "<text>"` describes the next task, `task <name>`
//! registers it. Anything else is an evaluation error — which the loader
//! downgrades to a per-file warning.

use std::collections::BTreeSet;
use std::path::Path;

use chore_lifecycle::ContentInspector;
use chore_loader::{EvalError, Evaluator, Namespace, TaskDef};

/// Evaluates chore-file content into the shared namespace.
pub struct ScriptEvaluator;

impl Evaluator for ScriptEvaluator {
    fn evaluate(
        &self,
        content: &str,
        path: &Path,
        namespace: &mut Namespace,
    ) -> Result<(), EvalError> {
        let mut current = "default".to_string();
        let mut pending_desc = String::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(id) = line.strip_prefix("namespace ") {
                current = word(id, idx, "namespace")?;
                continue;
            }
            if let Some(text) = line.strip_prefix("desc ") {
                pending_desc = text.trim().trim_matches('"').to_string();
                continue;
            }
            if let Some(name) = line.strip_prefix("task ") {
                namespace.register(TaskDef {
                    name: word(name, idx, "task")?,
                    namespace: current.clone(),
                    description: std::mem::take(&mut pending_desc),
                    source: path.to_path_buf(),
                });
                continue;
            }

            return Err(EvalError::new(format!(
                "line {}: unrecognized directive '{line}'",
                idx + 1
            )));
        }
        Ok(())
    }
}

fn word(arg: &str, idx: usize, directive: &str) -> Result<String, EvalError> {
    let arg = arg.trim();
    if arg.is_empty() || arg.contains(char::is_whitespace) {
        return Err(EvalError::new(format!(
            "line {}: {directive} expects a single name, got '{arg}'",
            idx + 1
        )));
    }
    Ok(arg.to_string())
}

/// Install-time scanner for the namespace identifiers chore content declares.
/// Mirrors [`ScriptEvaluator`]'s `namespace` directive without evaluating.
pub struct ScriptInspector;

impl ContentInspector for ScriptInspector {
    fn namespace_ids(&self, content: &str, _display_path: &Path) -> BTreeSet<String> {
        content
            .lines()
            .filter_map(|line| line.trim().strip_prefix("namespace "))
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
