//! Run command implementation.
//!
//! The `tidal-bootstrap run` command checks dependencies and downloads the
//! missing ones after confirmation. It is also what runs with no subcommand.

use tracing::debug;

use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::build_bootstrap;
use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    settings: Settings,
    assume_yes: bool,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(settings: Settings, assume_yes: bool) -> Self {
        Self {
            settings,
            assume_yes,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let bootstrap = build_bootstrap(&self.settings)?;
        let outcome = bootstrap.run(ui, self.assume_yes)?;
        debug!("Run finished: {:?}", outcome);
        Ok(CommandResult::from_exit_code(outcome.exit_code()))
    }
}
