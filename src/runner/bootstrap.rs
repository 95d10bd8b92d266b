//! The bootstrap flow: preflight, check, confirm, download.
//!
//! Probing produces a [`CheckReport`]; its missing list is handed explicitly
//! to [`Bootstrap::download_missing`], which queues one task per dependency,
//! drains the queue with a [`WorkerPool`] and joins before returning.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, warn};

use super::cancel::CancellationToken;
use super::pool::WorkerPool;
use super::queue::TaskQueue;
use crate::download::Downloader;
use crate::error::{BootstrapError, Result};
use crate::requirements::{check_required_tool, CheckReport, CheckResult, Dependency, Probe};
use crate::ui::{format_bytes, hints, DownloadBars, UserInterface};

/// Banner shown at the start of a run.
pub const HEADER: &str = "TIDAL BOOTSTRAP";

/// Question asked before downloading.
pub const DOWNLOAD_QUESTION: &str = "Do you wish to download them?";

/// Outcome of each queued download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    /// Completed downloads and where they were written.
    pub downloaded: Vec<(Dependency, PathBuf)>,
    /// Failed downloads and why.
    pub failed: Vec<(Dependency, String)>,
}

impl DownloadReport {
    /// Whether no download failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Names of the dependencies that failed.
    pub fn failed_names(&self) -> Vec<String> {
        self.failed
            .iter()
            .map(|(dep, _)| dep.name().to_string())
            .collect()
    }
}

/// How a full run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A required tool is missing; nothing was checked.
    MissingTool {
        /// The tool that was not found.
        tool: String,
    },
    /// Every dependency is already present.
    AllInstalled,
    /// The user chose not to download.
    Declined {
        /// Dependencies that stay missing.
        missing: Vec<Dependency>,
    },
    /// Downloads ran.
    Downloaded(DownloadReport),
}

impl RunOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Downloaded(report) if !report.is_success() => 1,
            _ => 0,
        }
    }
}

/// Orchestrates probing and downloading.
pub struct Bootstrap<P: Probe> {
    probe: P,
    downloader: Arc<Downloader>,
    workers: Option<usize>,
    required_tool: Option<String>,
}

impl<P: Probe> Bootstrap<P> {
    /// Create a bootstrap over a probe and a downloader.
    pub fn new(probe: P, downloader: Downloader) -> Self {
        Self {
            probe,
            downloader: Arc::new(downloader),
            workers: None,
            required_tool: None,
        }
    }

    /// Fix the worker count instead of one per known dependency.
    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Require a tool on PATH before anything is checked.
    pub fn with_required_tool(mut self, tool: Option<String>) -> Self {
        self.required_tool = tool;
        self
    }

    /// Workers started for a download batch.
    pub fn pool_size(&self) -> usize {
        self.workers
            .unwrap_or_else(|| self.downloader.sources().len())
            .max(1)
    }

    /// Probe every known dependency, in table order.
    pub fn check(&self) -> CheckReport {
        let results = self
            .downloader
            .sources()
            .dependencies()
            .map(|dependency| CheckResult {
                dependency,
                status: self.probe.status(dependency),
            })
            .collect();
        CheckReport { results }
    }

    /// Download installers for `missing`, each at most once, and wait for all.
    ///
    /// A failed download is logged and recorded; it never stops the other
    /// workers or the join.
    pub fn download_missing(
        &self,
        missing: &[Dependency],
        bars: &DownloadBars,
    ) -> Result<DownloadReport> {
        let mut queued: Vec<Dependency> = Vec::with_capacity(missing.len());
        for dep in missing {
            if !queued.contains(dep) {
                queued.push(*dep);
            }
        }
        if queued.is_empty() {
            return Ok(DownloadReport::default());
        }

        let queue = Arc::new(TaskQueue::new());
        let outcomes: Arc<Mutex<Vec<(Dependency, Result<PathBuf>)>>> =
            Arc::new(Mutex::new(Vec::new()));

        let handler = {
            let downloader = Arc::clone(&self.downloader);
            let bars = bars.clone();
            let outcomes = Arc::clone(&outcomes);
            move |dep: Dependency| {
                let mut bar = bars.add(dep.name());
                let result = downloader.download(dep, &mut |progress| bar.update(&progress));
                match &result {
                    Ok(path) => {
                        let size = format_bytes(bar.position());
                        bar.finish_success(&size);
                        debug!("{} saved to {}", dep, path.display());
                    }
                    Err(e) => {
                        warn!("download of {} failed: {}", dep, e);
                        bar.finish_error(&e.to_string());
                    }
                }
                outcomes
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push((dep, result));
            }
        };

        let mut pool = WorkerPool::start(
            self.pool_size(),
            Arc::clone(&queue),
            CancellationToken::new(),
            handler,
        )?;

        for dep in &queued {
            queue.put(*dep)?;
        }
        queue.join();
        pool.shutdown();

        let mut outcomes =
            std::mem::take(&mut *outcomes.lock().unwrap_or_else(PoisonError::into_inner));
        outcomes.sort_by_key(|(dep, _)| queued.iter().position(|q| q == dep));

        let mut report = DownloadReport::default();
        for (dep, result) in outcomes {
            match result {
                Ok(path) => report.downloaded.push((dep, path)),
                Err(e) => report.failed.push((dep, e.to_string())),
            }
        }
        for dep in &queued {
            let handled = report.downloaded.iter().any(|(d, _)| d == dep)
                || report.failed.iter().any(|(d, _)| d == dep);
            if !handled {
                report
                    .failed
                    .push((*dep, "download worker stopped unexpectedly".to_string()));
            }
        }
        Ok(report)
    }

    /// Full interactive flow.
    ///
    /// With `assume_yes` the question is skipped and downloads start directly.
    pub fn run(&self, ui: &mut dyn UserInterface, assume_yes: bool) -> Result<RunOutcome> {
        if let Some(tool) = &self.required_tool {
            if let Err(BootstrapError::MissingTool { tool, hint }) =
                check_required_tool(&self.probe, tool)
            {
                // Printed on the error channel so quiet mode still shows it.
                ui.error(&format!("This needs `{}` to run!", tool));
                ui.error(&format!("Please {}.", hint));
                return Ok(RunOutcome::MissingTool { tool });
            }
        }

        ui.show_header(HEADER);
        ui.message("Checking dependencies..\n");

        let report = self.check();
        for result in &report.results {
            ui.show_dependency(result);
        }

        let missing = report.missing();
        if missing.is_empty() {
            ui.success("All dependencies are installed");
            return Ok(RunOutcome::AllInstalled);
        }

        ui.message("\nThe following dependencies need to be installed:\n");
        for dep in &missing {
            ui.message(&format!("\t* {}", dep));
        }

        if !assume_yes && !ui.confirm(DOWNLOAD_QUESTION)? {
            ui.message(hints::after_decline());
            return Ok(RunOutcome::Declined { missing });
        }

        let bars = ui.download_bars();
        let downloads = self.download_missing(&missing, &bars)?;

        if !bars.is_visible() {
            for (dep, path) in &downloads.downloaded {
                ui.success(&format!("{} - {}", dep, path.display()));
            }
        }
        for (dep, error) in &downloads.failed {
            ui.error(&format!("{} - {}", dep, error));
        }

        if downloads.is_success() {
            ui.message(&hints::after_downloads(self.downloader.download_dir()));
        } else {
            ui.warning(&hints::after_failed_downloads(&downloads.failed_names()));
        }

        Ok(RunOutcome::Downloaded(downloads))
    }
}
