//! chore — task-module discovery and registry CLI.
//!
//! # Usage
//!
//! ```text
//! chore install <source> [--as NAME] [--relative]
//! chore uninstall <alias>
//! chore update <alias>
//! chore list [SEARCH] [--substring]
//! chore installed
//! chore <namespace:task>       (any non-built-in verb resolves as a task lookup)
//! ```

mod commands;
mod prompt;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    install::InstallArgs, installed::InstalledArgs, list::ListArgs, uninstall::UninstallArgs,
    update::UpdateArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "chore",
    version,
    about = "Discover, install, and look up chore task modules",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Install a chore file into the system repository, optionally named for
    /// future updates.
    Install(InstallArgs),

    /// Uninstall a named module.
    Uninstall(UninstallArgs),

    /// Update a module from its original location.
    Update(UpdateArgs),

    /// List the available chore tasks.
    List(ListArgs),

    /// List the installed modules and their tasks.
    Installed(InstalledArgs),

    /// Any other verb is looked up as a task (e.g. `chore devtools:greet`).
    #[command(external_subcommand)]
    Task(Vec<String>),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Install(args) => args.run(),
        Commands::Uninstall(args) => args.run(),
        Commands::Update(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Installed(args) => args.run(),
        Commands::Task(argv) => commands::run::run(argv),
    }
}
