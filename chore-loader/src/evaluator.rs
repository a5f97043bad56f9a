//! The task-DSL evaluation boundary.
//!
//! The loader does not know the task-definition language. An [`Evaluator`]
//! turns raw file content into [`TaskDef`](crate::TaskDef) registrations on
//! the shared [`Namespace`](crate::Namespace); the binary supplies the
//! implementation.

use std::path::Path;

use thiserror::Error;

use crate::namespace::Namespace;

/// A failure raised while evaluating a task-definition file's content.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct EvalError {
    pub message: String,
}

impl EvalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Evaluates task-definition content into the shared namespace.
pub trait Evaluator {
    /// Evaluate `content` (read from `path`, which is used for diagnostics
    /// only) and register every task it defines.
    fn evaluate(&self, content: &str, path: &Path, namespace: &mut Namespace)
        -> Result<(), EvalError>;
}
