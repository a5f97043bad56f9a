//! Task lookup for non-built-in verbs.
//!
//! Resolution is two-phase: clap already matched the built-in subcommands, so
//! anything landing here is treated as a qualified task name. The namespace
//! part narrows discovery via the registry's recorded constants — a single
//! task invocation never loads unrelated modules.

use anyhow::{Context, Result};
use colored::Colorize;
use thiserror::Error;

use chore_core::store;
use chore_core::ModuleRegistry;
use chore_loader::discovery::discover_at;
use chore_loader::Session;

use crate::commands::report_warnings;
use crate::script::ScriptEvaluator;

/// The verb matched no built-in command and no loaded task.
#[derive(Debug, Error)]
#[error("unknown task '{0}' — not a built-in command and not defined by any installed or project-local module")]
pub struct UnknownTask(pub String);

pub fn run(argv: Vec<String>) -> Result<()> {
    let verb = argv.into_iter().next().context("missing task name")?;

    let root = store::store_root();
    let registry = ModuleRegistry::load_at(&root)?;
    let cwd = std::env::current_dir().context("could not determine working directory")?;

    // `devtools:greet` only needs the modules declaring `devtools`.
    let target = verb.rsplit_once(':').map(|(ns, _)| ns.to_string());
    let files = discover_at(&root, &registry, &cwd, target.as_deref())?;

    let mut session = Session::new();
    let warnings = session.load_all(files, &ScriptEvaluator);
    report_warnings(&warnings);

    let task = session
        .namespace
        .get(&verb)
        .or_else(|| {
            // Bare verbs fall back to the default group.
            (!verb.contains(':'))
                .then(|| session.namespace.get(&format!("default:{verb}")))
                .flatten()
        })
        .ok_or(UnknownTask(verb.clone()))?;

    println!(
        "{} {} — {}",
        "✓".green().bold(),
        task.qualified_name(),
        if task.description.is_empty() {
            "(no description)"
        } else {
            task.description.as_str()
        }
    );
    println!("  defined in {}", task.source.display());
    Ok(())
}
