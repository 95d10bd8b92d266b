//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Settings;

/// Tidal Bootstrap - check for and download the TidalCycles toolchain.
#[derive(Debug, Parser)]
#[command(name = "tidal-bootstrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides ./tidal-bootstrap.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory installers are saved to
    #[arg(short = 'd', long, global = true)]
    pub download_dir: Option<PathBuf>,

    /// Number of download workers
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub workers: Option<u64>,

    /// Per-request timeout in seconds
    #[arg(short, long, global = true)]
    pub timeout: Option<u64>,

    /// Download missing dependencies without asking
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Show verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Apply command-line overrides on top of file settings.
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(dir) = &self.download_dir {
            settings.download_dir = dir.clone();
        }
        if let Some(workers) = self.workers {
            settings.workers = usize::try_from(workers).ok();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        settings
    }
}

/// Available subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Check dependencies and offer to download missing ones (default)
    Run,

    /// Check dependencies without downloading
    Check,

    /// List known dependencies and their download sources
    List,
}
