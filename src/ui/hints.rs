//! Follow-up hints shown after a run.

use std::path::Path;

/// Hint after every missing installer was downloaded.
pub fn after_downloads(download_dir: &Path) -> String {
    format!(
        "Installers are in {}. Run them to finish setting up.",
        download_dir.display()
    )
}

/// Hint after some downloads failed.
pub fn after_failed_downloads(failed: &[String]) -> String {
    if failed.is_empty() {
        return "Run `tidal-bootstrap` again to retry.".to_string();
    }
    format!(
        "Run `tidal-bootstrap` again to retry: {}",
        failed.join(", ")
    )
}

/// Hint when the user declines downloading.
pub fn after_decline() -> &'static str {
    "Okay, quitting"
}
