pub mod install;
pub mod installed;
pub mod list;
pub mod run;
pub mod uninstall;
pub mod update;

use colored::Colorize;

use chore_loader::LoadWarning;

/// Per-file load failures go to stderr and never abort the command.
pub(crate) fn report_warnings(warnings: &[LoadWarning]) {
    for warning in warnings {
        eprintln!("{} {warning}", "WARNING:".yellow().bold());
    }
}
