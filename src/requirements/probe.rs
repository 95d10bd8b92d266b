//! Availability probing for dependencies and tools.
//!
//! A dependency counts as present when either an application bundle with its
//! name exists in one of the application directories, or an executable with
//! its name resolves on the search path.
//!
//! # Example
//!
//! ```no_run
//! use tidal_bootstrap::requirements::{Dependency, Probe, SystemProbe};
//!
//! let probe = SystemProbe::new();
//! if !probe.is_installed(Dependency::Ghci) {
//!     println!("ghci is missing");
//! }
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::status::{DependencyStatus, Location};
use super::Dependency;

/// Suffix an application bundle directory must carry.
const APP_BUNDLE_EXTENSION: &str = "app";

/// Determines whether dependencies and tools are present on the host.
pub trait Probe: Send + Sync {
    /// Probe one dependency.
    fn status(&self, dependency: Dependency) -> DependencyStatus;

    /// Locate a command-line tool by name.
    fn find_tool(&self, tool: &str) -> Option<PathBuf>;

    /// Whether a dependency is present.
    fn is_installed(&self, dependency: Dependency) -> bool {
        self.status(dependency).is_installed()
    }
}

/// Probe backed by the real filesystem.
///
/// Application directories and search path are captured at construction so
/// that a probe can be built against a fixture tree in tests.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    app_dirs: Vec<PathBuf>,
    search_path: Vec<PathBuf>,
}

impl SystemProbe {
    /// Probe using `/Applications`, `~/Applications` and the process PATH.
    pub fn new() -> Self {
        Self {
            app_dirs: default_app_dirs(),
            search_path: parse_system_path(),
        }
    }

    /// Replace the application directories.
    pub fn with_app_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.app_dirs = dirs;
        self
    }

    /// Replace the executable search path.
    pub fn with_search_path(mut self, path: Vec<PathBuf>) -> Self {
        self.search_path = path;
        self
    }

    /// Application directories checked, in order.
    pub fn app_dirs(&self) -> &[PathBuf] {
        &self.app_dirs
    }

    /// Find an application bundle named `name` in any application directory.
    ///
    /// Every directory is checked; the first one holding the bundle wins.
    pub fn find_app_bundle(&self, name: &str) -> Option<PathBuf> {
        if Path::new(name).extension() != Some(OsStr::new(APP_BUNDLE_EXTENSION)) {
            return None;
        }
        self.app_dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_dir())
    }

    /// Resolve an executable the way `which` does.
    ///
    /// A name with a directory component is tested as given; a bare name is
    /// looked up in each search path entry in order.
    pub fn find_executable(&self, name: &str) -> Option<PathBuf> {
        if has_directory_component(name) {
            let path = PathBuf::from(name);
            return (path.is_file() && is_executable(&path)).then_some(path);
        }
        resolve_tool_path(name, &self.search_path)
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl Probe for SystemProbe {
    fn status(&self, dependency: Dependency) -> DependencyStatus {
        let name = dependency.name();

        let location = self
            .find_app_bundle(name)
            .map(Location::AppBundle)
            .or_else(|| self.find_executable(name).map(Location::Executable));

        match location {
            Some(location) => {
                debug!("{} found at {}", name, location.path().display());
                DependencyStatus::Installed { location }
            }
            None => {
                debug!("{} not found", name);
                DependencyStatus::Missing
            }
        }
    }

    fn find_tool(&self, tool: &str) -> Option<PathBuf> {
        self.find_executable(tool)
    }
}

/// System and per-user application directories.
pub fn default_app_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("/Applications")];
    if let Some(home) = dirs::home_dir() {
        dirs.push(home.join("Applications"));
    }
    dirs
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
///
/// An unset PATH yields an empty list.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| parse_search_path(&path))
        .unwrap_or_default()
}

/// Split a PATH-style value and strip quoting from each entry.
///
/// Empty entries are dropped; they never mean the current directory.
pub fn parse_search_path(value: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .map(strip_quotes)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

fn strip_quotes(path: PathBuf) -> PathBuf {
    match path.to_str() {
        Some(s) if s.contains('"') => PathBuf::from(s.trim_matches('"')),
        _ => path,
    }
}

fn has_directory_component(name: &str) -> bool {
    name.contains(std::path::MAIN_SEPARATOR) || name.contains('/')
}
