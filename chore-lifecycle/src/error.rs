//! Error types for chore-lifecycle.

use std::path::PathBuf;

use thiserror::Error;

use chore_core::RegistryError;

/// All errors that can arise from install/update/uninstall.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// A local source path (or a directory's entry-point file) does not exist.
    #[error("error opening file '{source_name}'")]
    SourceNotFound { source_name: String },

    /// A remote fetch failed — network error, bad status, or unreadable body.
    #[error("error opening URI '{url}': {message}")]
    RemoteFetchFailed { url: String, message: String },

    /// Uninstall/update named an alias that is not in the registry (or, for
    /// update, one with no remembered origin).
    #[error("can't find module '{alias}'")]
    AliasNotFound { alias: String },

    /// An error from the registry or content store.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interactive prompt collaborator failed (closed stdin, etc.).
    #[error("prompt failed: {0}")]
    Prompt(#[source] std::io::Error),
}

/// Convenience constructor for [`LifecycleError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> LifecycleError {
    LifecycleError::Io {
        path: path.into(),
        source,
    }
}
