//! Error types for bootstrap operations.
//!
//! This module defines [`BootstrapError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing dependency is not an error; it is reported as a status
//! - A failed download is reported per item and never aborts the other workers
//! - Use `anyhow::Error` (via `BootstrapError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::requirements::Dependency;
use crate::runner::QueueError;

/// Core error type for bootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A tool the bootstrap itself relies on is not on PATH.
    #[error("Required tool '{tool}' not found: {hint}")]
    MissingTool { tool: String, hint: String },

    /// Failed to parse the settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Settings file named on the command line does not exist.
    #[error("Settings file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// The source table has no URL for a queued dependency.
    #[error("No download source registered for '{0}'")]
    UnknownSource(Dependency),

    /// A source URL has no usable file name in its path.
    #[error("Cannot derive a file name from URL: {url}")]
    InvalidUrl { url: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// Task queue misuse.
    #[error("Task queue error: {0}")]
    Queue(#[from] QueueError),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;
