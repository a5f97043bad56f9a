//! `chore install <source> [--as NAME] [--relative]`

use anyhow::{Context, Result};
use clap::Args;

use chore_core::store;
use chore_lifecycle::{install_at, InstallOptions, InstallOutcome};

use crate::prompt::StdinPrompter;
use crate::script::ScriptInspector;

/// Install a chore file into the system repository.
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// File path, directory (containing main.chore), or http(s) URL.
    pub source: String,

    /// Register under this name for future updates.
    #[arg(long = "as", value_name = "NAME")]
    pub alias: Option<String>,

    /// Remember the source exactly as given instead of absolutizing it.
    #[arg(long)]
    pub relative: bool,
}

impl InstallArgs {
    pub fn run(self) -> Result<()> {
        let root = store::store_root();
        let options = InstallOptions {
            alias: self.alias,
            relative: self.relative,
        };

        let outcome = install_at(
            &root,
            &self.source,
            options,
            &mut StdinPrompter,
            &ScriptInspector,
        )
        .with_context(|| format!("failed to install '{}'", self.source))?;

        match outcome {
            InstallOutcome::Declined => println!("Installation aborted."),
            InstallOutcome::Installed(id) => {
                println!("Storing chore file in your system repository");
                println!("✓ installed as {id}");
            }
        }
        Ok(())
    }
}
