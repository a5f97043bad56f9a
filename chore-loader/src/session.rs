//! Load-once session state.
//!
//! A [`Session`] owns the set of already-evaluated file paths and the shared
//! [`Namespace`] for one process run. Loading the same path twice is a no-op;
//! a file that fails to read or evaluate produces a [`LoadWarning`] and the
//! batch continues — one broken installed module must never prevent every
//! other task from being listed or run.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::evaluator::Evaluator;
use crate::namespace::Namespace;

/// Non-fatal per-file load failure, reported on the diagnostic stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to load chore file {:?}: {}",
            self.path.display().to_string(),
            self.message
        )
    }
}

/// Outcome of a single [`Session::load_if_new`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and evaluated into the namespace.
    Loaded,
    /// The file was already evaluated this run; nothing happened.
    AlreadyLoaded,
    /// Reading or evaluating failed; the warning was logged.
    Failed(LoadWarning),
}

/// Per-process loader state: the loaded-file set plus the shared namespace.
///
/// Constructed at process start, torn down at process end. Never persisted.
#[derive(Debug, Default)]
pub struct Session {
    loaded: HashSet<PathBuf>,
    pub namespace: Namespace,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `path` into the namespace unless it was already loaded.
    ///
    /// Paths are compared in absolute form, so re-discovery of the same file
    /// under a different spelling is still a no-op. The path joins the loaded
    /// set only after a successful evaluation.
    pub fn load_if_new(&mut self, path: &Path, evaluator: &dyn Evaluator) -> LoadOutcome {
        let abs = absolutize(path);
        if self.loaded.contains(&abs) {
            return LoadOutcome::AlreadyLoaded;
        }

        let result = std::fs::read_to_string(&abs)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                evaluator
                    .evaluate(&content, &abs, &mut self.namespace)
                    .map_err(|e| e.message)
            });

        match result {
            Ok(()) => {
                self.loaded.insert(abs);
                LoadOutcome::Loaded
            }
            Err(message) => {
                let warning = LoadWarning { path: abs, message };
                tracing::warn!("{warning}");
                LoadOutcome::Failed(warning)
            }
        }
    }

    /// Load a discovery batch, collecting the warnings of every file that
    /// failed. Successes and already-loaded files produce nothing.
    pub fn load_all(
        &mut self,
        paths: impl IntoIterator<Item = PathBuf>,
        evaluator: &dyn Evaluator,
    ) -> Vec<LoadWarning> {
        paths
            .into_iter()
            .filter_map(|path| match self.load_if_new(&path, evaluator) {
                LoadOutcome::Failed(warning) => Some(warning),
                LoadOutcome::Loaded | LoadOutcome::AlreadyLoaded => None,
            })
            .collect()
    }

    /// Whether `path` has already been evaluated this run.
    pub fn is_loaded(&self, path: &Path) -> bool {
        self.loaded.contains(&absolutize(path))
    }
}

/// Best-effort absolute form: canonical when the file exists, else anchored at
/// the current directory.
fn absolutize(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
