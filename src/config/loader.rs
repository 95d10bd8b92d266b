//! Settings file discovery and parsing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Settings;
use crate::error::{BootstrapError, Result};

/// File name looked up in the working directory.
pub const SETTINGS_FILE: &str = "tidal-bootstrap.yml";

/// Load settings.
///
/// An explicit path must exist. Without one, `tidal-bootstrap.yml` in `dir`
/// is used when present and defaults otherwise.
pub fn load_settings(explicit: Option<&Path>, dir: &Path) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_settings_file(path);
    }

    let candidate = default_settings_path(dir);
    if candidate.is_file() {
        load_settings_file(&candidate)
    } else {
        debug!("No {} in {}, using defaults", SETTINGS_FILE, dir.display());
        Ok(Settings::default())
    }
}

/// Path of the settings file for a directory.
pub fn default_settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE)
}

/// Load a single settings file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BootstrapError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BootstrapError::Io(e)
        }
    })?;

    debug!("Loading settings from {}", path.display());
    parse_settings(&content, path)
}

/// Parse YAML content into [`Settings`].
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| BootstrapError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
