//! Preconditions checked before any dependency is probed.

use std::path::PathBuf;

use tracing::debug;

use super::Probe;
use crate::error::{BootstrapError, Result};

/// Tool the bootstrap expects on PATH by default.
pub const DEFAULT_REQUIRED_TOOL: &str = "brew";

/// Where to get a required tool from, when known.
pub fn install_url(tool: &str) -> Option<&'static str> {
    match tool {
        "brew" => Some("http://brew.sh/"),
        _ => None,
    }
}

/// Ensure a required tool resolves on the search path.
///
/// Returns the resolved path, or [`BootstrapError::MissingTool`] carrying
/// instructions for the user.
pub fn check_required_tool(probe: &dyn Probe, tool: &str) -> Result<PathBuf> {
    match probe.find_tool(tool) {
        Some(path) => {
            debug!("required tool {} at {}", tool, path.display());
            Ok(path)
        }
        None => Err(BootstrapError::MissingTool {
            tool: tool.to_string(),
            hint: match install_url(tool) {
                Some(url) => format!(
                    "install it and run this again, following the instructions at {}",
                    url
                ),
                None => "install it and run this again".to_string(),
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::SystemProbe;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_tool_is_reported_with_url() {
        let probe = SystemProbe::new()
            .with_app_dirs(vec![])
            .with_search_path(vec![]);
        let err = check_required_tool(&probe, "brew").unwrap_err();
        match err {
            BootstrapError::MissingTool { tool, hint } => {
                assert_eq!(tool, "brew");
                assert!(hint.contains("http://brew.sh/"));
            }
            other => panic!("Expected MissingTool, got {:?}", other),
        }
    }

    #[test]
    fn unknown_tool_hint_has_no_url() {
        let probe = SystemProbe::new().with_search_path(vec![]);
        let err = check_required_tool(&probe, "port").unwrap_err();
        assert!(!err.to_string().contains("http"));
    }

    #[cfg(unix)]
    #[test]
    fn present_tool_resolves() {
        use std::os::unix::fs::PermissionsExt;
        let temp = TempDir::new().unwrap();
        let brew = temp.path().join("brew");
        fs::write(&brew, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&brew, fs::Permissions::from_mode(0o755)).unwrap();

        let probe = SystemProbe::new().with_search_path(vec![temp.path().to_path_buf()]);
        assert_eq!(check_required_tool(&probe, "brew").unwrap(), brew);
    }
}
