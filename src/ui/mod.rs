//! Console user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`ConsoleUI`] for real terminal and piped usage
//! - [`MockUI`] for tests
//! - Yes/no prompts and per-download progress bars
//!
//! # Example
//!
//! ```
//! use tidal_bootstrap::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_confirm_responses(vec![false]);
//! ui.show_header("TIDAL BOOTSTRAP");
//! assert!(!ui.confirm("Do you wish to download them?").unwrap());
//! assert!(ui.headers().contains(&"TIDAL BOOTSTRAP".to_string()));
//! ```

pub mod hints;
pub mod mock;
pub mod output;
pub mod progress;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use progress::{format_bytes, format_duration, DownloadBar, DownloadBars};
pub use prompts::{parse_answer, prompt_yes_no, read_yes_no};
pub use terminal::{create_ui, ConsoleUI};
pub use theme::{should_use_colors, TidalTheme};

use crate::error::Result;
use crate::requirements::CheckResult;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the glyph line for one checked dependency.
    fn show_dependency(&mut self, result: &CheckResult);

    /// Ask a yes/no question. An empty answer means yes.
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Progress bars for a batch of downloads.
    fn download_bars(&self) -> DownloadBars;
}
