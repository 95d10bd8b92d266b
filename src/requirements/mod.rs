//! Dependency detection.
//!
//! This module knows which dependencies exist, where their installers live,
//! and how to tell whether they are already present on the host.
//!
//! # Modules
//!
//! - [`registry`] - The closed set of dependencies and their source table
//! - [`probe`] - Application bundle and PATH probing
//! - [`status`] - Probe result types
//! - [`preflight`] - Checks that must pass before probing starts

pub mod preflight;
pub mod probe;
pub mod registry;
pub mod status;

pub use preflight::{check_required_tool, DEFAULT_REQUIRED_TOOL};
pub use probe::{Probe, SystemProbe};
pub use registry::{Dependency, SourceTable};
pub use status::{CheckReport, CheckResult, DependencyStatus, Location};
