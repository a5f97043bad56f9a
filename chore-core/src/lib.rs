//! Chore core library — domain types, module registry persistence, content store.
//!
//! Public API surface:
//! - [`types`] — newtypes and the registry entry struct
//! - [`error`] — [`RegistryError`]
//! - [`registry`] — the alias → entry mapping persisted as `chore.yml`
//! - [`store`] — content-addressed storage of installed module bodies

pub mod error;
pub mod registry;
pub mod store;
pub mod types;

pub use error::RegistryError;
pub use registry::ModuleRegistry;
pub use types::{ModuleAlias, ModuleEntry, StoredId};
