//! `chore installed` — registry contents plus every installed module's tasks.

use anyhow::Result;
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use chore_core::registry::registry_path_at;
use chore_core::store;
use chore_core::ModuleRegistry;
use chore_loader::Session;

use crate::commands::report_warnings;
use crate::script::ScriptEvaluator;

/// List the installed modules and their tasks.
#[derive(Args, Debug)]
pub struct InstalledArgs {}

#[derive(Tabled)]
struct ModuleRow {
    #[tabled(rename = "module")]
    module: String,
    #[tabled(rename = "namespaces")]
    namespaces: String,
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "task")]
    task: String,
    #[tabled(rename = "description")]
    description: String,
}

impl InstalledArgs {
    pub fn run(self) -> Result<()> {
        let root = store::store_root();
        let registry = ModuleRegistry::load_at(&root)?;

        if registry.is_empty() {
            println!("No modules installed.");
            return Ok(());
        }

        let module_rows: Vec<ModuleRow> = registry
            .iter()
            .map(|(alias, entry)| ModuleRow {
                module: alias.to_string(),
                namespaces: entry
                    .constants
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
            })
            .collect();
        let mut table = Table::new(module_rows);
        table.with(Style::rounded());
        println!("{table}");

        // Load every stored object (skipping the registry file) and show the
        // tasks they define.
        let registry_file = registry_path_at(&root);
        let files: Vec<_> = store::list_objects_at(&root)?
            .into_iter()
            .filter(|path| path != &registry_file)
            .collect();
        let mut session = Session::new();
        let warnings = session.load_all(files, &ScriptEvaluator);
        report_warnings(&warnings);

        if session.namespace.is_empty() {
            return Ok(());
        }
        let task_rows: Vec<TaskRow> = session
            .namespace
            .tasks()
            .map(|task| TaskRow {
                task: task.qualified_name(),
                description: task.description.clone(),
            })
            .collect();
        let mut table = Table::new(task_rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
