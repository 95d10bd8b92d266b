//! Settings loading.
//!
//! Settings come from an optional `tidal-bootstrap.yml`; command-line flags
//! are applied on top by the CLI layer.
//!
//! # Example
//!
//! ```
//! use tidal_bootstrap::config::{load_settings, SETTINGS_FILE};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(SETTINGS_FILE), "workers: 2").unwrap();
//!
//! let settings = load_settings(None, temp.path()).unwrap();
//! assert_eq!(settings.workers, Some(2));
//! ```

pub mod loader;
pub mod settings;

pub use loader::{
    default_settings_path, load_settings, load_settings_file, parse_settings, SETTINGS_FILE,
};
pub use settings::{Settings, DEFAULT_DOWNLOAD_DIR};
