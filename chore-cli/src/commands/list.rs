//! `chore list [SEARCH] [--substring]`

use anyhow::{Context, Result};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use chore_core::store;
use chore_core::ModuleRegistry;
use chore_loader::discovery::discover_at;
use chore_loader::Session;

use crate::commands::report_warnings;
use crate::script::ScriptEvaluator;

/// List the available chore tasks.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show only tasks whose qualified name starts with this.
    pub search: Option<String>,

    /// Match SEARCH anywhere in the qualified name instead of at the start.
    #[arg(long)]
    pub substring: bool,
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "task")]
    task: String,
    #[tabled(rename = "description")]
    description: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let root = store::store_root();
        let registry = ModuleRegistry::load_at(&root)?;
        let cwd = std::env::current_dir().context("could not determine working directory")?;

        let files = discover_at(&root, &registry, &cwd, None)?;
        let mut session = Session::new();
        let warnings = session.load_all(files, &ScriptEvaluator);
        report_warnings(&warnings);

        let needle = self.search.unwrap_or_default().to_lowercase();
        let rows: Vec<TaskRow> = session
            .namespace
            .tasks()
            .filter(|task| {
                let qualified = task.qualified_name().to_lowercase();
                if self.substring {
                    qualified.contains(&needle)
                } else {
                    qualified.starts_with(&needle)
                }
            })
            .map(|task| TaskRow {
                task: task.qualified_name(),
                description: task.description.clone(),
            })
            .collect();

        if rows.is_empty() {
            println!("No chore tasks available.");
            return Ok(());
        }

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
