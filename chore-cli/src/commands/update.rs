//! `chore update <alias>`

use anyhow::{Context, Result};
use clap::Args;

use chore_core::store;
use chore_core::ModuleRegistry;
use chore_lifecycle::update_at;

use crate::prompt::StdinPrompter;
use crate::script::ScriptInspector;

/// Update a module from its original location.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Alias the module was installed under.
    pub alias: String,
}

impl UpdateArgs {
    pub fn run(self) -> Result<()> {
        let root = store::store_root();

        // Purely informational; update_at re-loads and validates itself.
        let registry = ModuleRegistry::load_at(&root)?;
        if let Some(location) = registry.get(&self.alias).and_then(|e| e.location.as_deref()) {
            println!("Updating '{}' from {location}", self.alias);
        }

        update_at(&root, &self.alias, &mut StdinPrompter, &ScriptInspector)
            .with_context(|| format!("failed to update '{}'", self.alias))?;
        Ok(())
    }
}
