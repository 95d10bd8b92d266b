//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Confirm answers are queued up front.

use std::collections::VecDeque;

use crate::error::Result;
use crate::requirements::{CheckResult, Dependency};

use super::{DownloadBars, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    dependencies: Vec<(Dependency, bool)>,
    confirm_queue: VecDeque<bool>,
    confirms_shown: Vec<String>,
    default_confirm: bool,
}

impl MockUI {
    /// Create a new MockUI that answers yes.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            successes: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            headers: Vec::new(),
            dependencies: Vec::new(),
            confirm_queue: VecDeque::new(),
            confirms_shown: Vec::new(),
            default_confirm: true,
        }
    }

    /// Queue answers returned by successive `confirm` calls.
    pub fn queue_confirm_responses(&mut self, responses: Vec<bool>) {
        self.confirm_queue.extend(responses);
    }

    /// Answer used once the queue is empty.
    pub fn set_default_confirm(&mut self, answer: bool) {
        self.default_confirm = answer;
    }

    /// Get captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Dependency lines shown, with their installed flag.
    pub fn dependencies(&self) -> &[(Dependency, bool)] {
        &self.dependencies
    }

    /// Questions passed to `confirm`.
    pub fn confirms_shown(&self) -> &[String] {
        &self.confirms_shown
    }

    /// Check if a message containing the text was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing the text was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing the text was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_dependency(&mut self, result: &CheckResult) {
        self.dependencies
            .push((result.dependency, result.status.is_installed()));
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.confirms_shown.push(question.to_string());
        Ok(self.confirm_queue.pop_front().unwrap_or(self.default_confirm))
    }

    fn download_bars(&self) -> DownloadBars {
        DownloadBars::hidden()
    }
}
