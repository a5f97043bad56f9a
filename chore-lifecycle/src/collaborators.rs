//! Collaborator boundaries the lifecycle manager delegates to.
//!
//! Both are synchronous and blocking; the binary wires real implementations
//! (stdin prompts, the task-DSL scanner) and tests inject scripted ones.

use std::collections::BTreeSet;
use std::io;
use std::path::Path;

/// Interactive confirmation and naming during install.
pub trait Prompter {
    /// Show the fetched content and ask whether to continue. `false` aborts
    /// the install with no side effects.
    fn confirm_install(&mut self, source: &str, content: &str) -> io::Result<bool>;

    /// Ask for an alias, offering `default`. Implementations return the
    /// default when the answer is blank.
    fn prompt_alias(&mut self, default: &str) -> io::Result<String>;
}

/// Static content inspection: which namespace identifiers would this content
/// define? Called once, at install time; the result is cached in the registry
/// entry so listings never re-scan the stored file.
pub trait ContentInspector {
    fn namespace_ids(&self, content: &str, display_path: &Path) -> BTreeSet<String>;
}
