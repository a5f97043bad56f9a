//! `chore uninstall <alias>`

use anyhow::{Context, Result};
use clap::Args;

use chore_core::store;
use chore_lifecycle::uninstall_at;

/// Uninstall a named module.
#[derive(Args, Debug)]
pub struct UninstallArgs {
    /// Alias the module was installed under.
    pub alias: String,
}

impl UninstallArgs {
    pub fn run(self) -> Result<()> {
        let root = store::store_root();
        println!("Uninstalling {}.", self.alias);
        uninstall_at(&root, &self.alias)
            .with_context(|| format!("failed to uninstall '{}'", self.alias))?;
        println!("Done.");
        Ok(())
    }
}
