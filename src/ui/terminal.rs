//! Terminal and piped-stdin UI.

use std::io::{self, IsTerminal, Write};

use console::Term;

use crate::error::Result;
use crate::requirements::{CheckResult, DependencyStatus};

use super::{
    prompt_yes_no, read_yes_no, should_use_colors, DownloadBars, OutputMode, TidalTheme,
    UserInterface,
};

/// Console UI writing to stdout.
///
/// Prompts go through dialoguer when stdin is a terminal and are read
/// line-by-line from stdin otherwise.
pub struct ConsoleUI {
    term: Term,
    theme: TidalTheme,
    mode: OutputMode,
    stdin_is_term: bool,
}

impl ConsoleUI {
    /// Create a new console UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            TidalTheme::new()
        } else {
            TidalTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
            stdin_is_term: io::stdin().is_terminal(),
        }
    }
}

/// Create the console UI, honouring `--no-color` and `NO_COLOR`.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    Box::new(ConsoleUI::new(mode, !no_color && should_use_colors()))
}

impl UserInterface for ConsoleUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_dependency(&mut self, result: &CheckResult) {
        if !self.mode.shows_status() {
            return;
        }
        let mut line = self
            .theme
            .format_dependency(result.dependency.name(), result.status.is_installed());
        if let (true, DependencyStatus::Installed { location }) =
            (self.mode.shows_details(), &result.status)
        {
            let detail = format!("({})", location.path().display());
            line = format!("{} {}", line, self.theme.dim.apply_to(detail));
        }
        writeln!(self.term, "{}", line).ok();
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        writeln!(self.term, "\n{}", question)?;
        writeln!(self.term, "y/n (or press Enter to accept)\n")?;

        if self.stdin_is_term {
            prompt_yes_no(&self.term)
        } else {
            let stdin = io::stdin();
            read_yes_no(&mut stdin.lock(), &mut self.term)
        }
    }

    fn download_bars(&self) -> DownloadBars {
        if self.mode.shows_progress() && self.term.is_term() {
            DownloadBars::new(self.theme.clone())
        } else {
            DownloadBars::hidden()
        }
    }
}
