//! Builds the probe, downloader and bootstrap from resolved settings.

use std::time::Duration;

use tracing::debug;

use crate::config::Settings;
use crate::download::Downloader;
use crate::error::Result;
use crate::requirements::{SourceTable, SystemProbe};
use crate::runner::Bootstrap;

/// Probe over the configured application directories and the process PATH.
pub fn build_probe(settings: &Settings) -> SystemProbe {
    let probe = match &settings.app_dirs {
        Some(dirs) => SystemProbe::new().with_app_dirs(dirs.clone()),
        None => SystemProbe::new(),
    };
    debug!("Looking for app bundles in {:?}", probe.app_dirs());
    probe
}

/// Downloader for the built-in source table.
pub fn build_downloader(settings: &Settings) -> Result<Downloader> {
    Downloader::with_timeout(
        settings.download_dir.clone(),
        SourceTable::builtin(),
        Duration::from_secs(settings.timeout_secs),
    )
}

/// Fully configured bootstrap.
pub fn build_bootstrap(settings: &Settings) -> Result<Bootstrap<SystemProbe>> {
    Ok(Bootstrap::new(build_probe(settings), build_downloader(settings)?)
        .with_workers(settings.workers)
        .with_required_tool(settings.required_tool.clone()))
}
