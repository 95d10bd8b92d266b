//! Tidal Bootstrap - dependency checker and installer downloader.
//!
//! Tidal Bootstrap checks a host for the tools a TidalCycles setup needs
//! (SuperCollider, Atom and the Haskell interpreter), lists the missing ones,
//! and after confirmation downloads their installers concurrently.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file loading
//! - [`download`] - HTTP downloads and destination file names
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - The dependency table and host probing
//! - [`runner`] - Task queue, worker pool and the bootstrap flow
//! - [`ui`] - Prompts, progress bars and terminal output
//!
//! # Example
//!
//! ```
//! use tidal_bootstrap::download::filename_from_url;
//! use tidal_bootstrap::requirements::{Dependency, SourceTable};
//!
//! let table = SourceTable::builtin();
//! let url = table.url(Dependency::Atom).unwrap();
//! assert_eq!(filename_from_url(url).unwrap(), "atom-mac.zip");
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod ui;

pub use error::{BootstrapError, Result};
