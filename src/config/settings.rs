//! Settings schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::download::DEFAULT_TIMEOUT;
use crate::requirements::DEFAULT_REQUIRED_TOOL;

/// Directory installers are written to when nothing else is configured.
pub const DEFAULT_DOWNLOAD_DIR: &str = "tidal-deps";

/// Settings read from `tidal-bootstrap.yml`.
///
/// Every field is optional in the file. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Where installers are saved.
    pub download_dir: PathBuf,

    /// Worker threads; one per known dependency when unset.
    pub workers: Option<usize>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Tool that must be on PATH before anything is checked.
    /// `null` disables the preflight.
    pub required_tool: Option<String>,

    /// Directories searched for application bundles.
    /// Defaults to `/Applications` and `~/Applications`.
    pub app_dirs: Option<Vec<PathBuf>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            workers: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            required_tool: Some(DEFAULT_REQUIRED_TOOL.to_string()),
            app_dirs: None,
        }
    }
}
