//! Visual theme and styling.

use console::Style;

/// Glyph for a dependency that is present.
pub const INSTALLED_GLYPH: &str = "✓";

/// Glyph for a dependency that is missing.
pub const MISSING_GLYPH: &str = "✗";

/// Console theme.
#[derive(Debug, Clone)]
pub struct TidalTheme {
    /// Style for success messages and present dependencies (green).
    pub success: Style,
    /// Style for warnings and missing dependencies (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for the banner (magenta bold).
    pub header: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for TidalTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TidalTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().magenta().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format the line for a checked dependency.
    pub fn format_dependency(&self, name: &str, installed: bool) -> String {
        let glyph = if installed {
            self.success.apply_to(INSTALLED_GLYPH)
        } else {
            self.warning.apply_to(MISSING_GLYPH)
        };
        format!("\t{} {}", glyph, name)
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
