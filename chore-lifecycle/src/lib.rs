//! # chore-lifecycle
//!
//! Install / update / uninstall orchestration for the module registry.
//!
//! [`install_at`] fetches a source (local file, directory convention, or
//! remote URL), confirms it with the user, and commits it to the registry and
//! content store. [`uninstall_at`] and [`update_at`] operate on registered
//! aliases. Interactive collaborators are injected via the [`Prompter`] and
//! [`ContentInspector`] traits.

pub mod collaborators;
pub mod error;
pub mod fetch;
pub mod install;

pub use collaborators::{ContentInspector, Prompter};
pub use error::LifecycleError;
pub use install::{install_at, stored_id_for, uninstall_at, update_at, InstallOptions, InstallOutcome};
