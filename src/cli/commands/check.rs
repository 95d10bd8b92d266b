//! Check command implementation.
//!
//! The `tidal-bootstrap check` command probes every known dependency and
//! reports which are present, without prompting or downloading.

use crate::config::Settings;
use crate::error::Result;
use crate::runner::HEADER;
use crate::ui::UserInterface;

use super::context::build_bootstrap;
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    settings: Settings,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let bootstrap = build_bootstrap(&self.settings)?;

        ui.show_header(HEADER);
        ui.message("Checking dependencies..\n");

        let report = bootstrap.check();
        for result in &report.results {
            ui.show_dependency(result);
        }

        let missing = report.missing();
        if missing.is_empty() {
            ui.success("All dependencies are installed");
            return Ok(CommandResult::success());
        }

        let names: Vec<&str> = missing.iter().map(|dep| dep.name()).collect();
        ui.warning(&format!("Missing: {}", names.join(", ")));
        Ok(CommandResult::failure(1))
    }
}
