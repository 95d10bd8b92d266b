//! List command implementation.
//!
//! The `tidal-bootstrap list` command prints every known dependency and the
//! URL its installer is fetched from.

use crate::error::Result;
use crate::requirements::SourceTable;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    sources: SourceTable,
}

impl ListCommand {
    /// Create a list command over the built-in table.
    pub fn new() -> Self {
        Self {
            sources: SourceTable::builtin(),
        }
    }
}

impl Default for ListCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let width = self
            .sources
            .dependencies()
            .map(|dep| dep.name().len())
            .max()
            .unwrap_or(0);

        for (dep, url) in self.sources.entries() {
            ui.message(&format!("{:<width$}  {}", dep.name(), url, width = width));
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::Dependency;
    use crate::ui::MockUI;

    #[test]
    fn lists_every_dependency_in_table_order() {
        let mut ui = MockUI::new();
        let result = ListCommand::new().execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.messages().len(), Dependency::ALL.len());
        assert!(ui.messages()[0].starts_with("SuperCollider.app"));
        assert!(ui.messages()[2].starts_with("ghci"));
        assert!(ui.messages()[1].contains("atom-mac.zip"));
    }
}
