//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads settings,
//! applies command-line overrides and routes the subcommand:
//! - `run` (default) - check, confirm, download
//! - `check` - check only
//! - `list` - print the source table

pub mod check;
pub mod context;
pub mod dispatcher;
pub mod list;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
