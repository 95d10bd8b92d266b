//! Per-download progress bars.

use std::time::{Duration, Instant};

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::TidalTheme;
use crate::download::ChunkProgress;

const BAR_TEMPLATE: &str =
    "{spinner:.magenta} {prefix:<18} [{bar:30.magenta/blue}] {bytes}/{total_bytes} ({percent}%)";
const SPINNER_TEMPLATE: &str = "{spinner:.magenta} {prefix:<18} {bytes} {msg}";

/// A set of download bars drawn together.
///
/// Cheap to clone; clones draw into the same set, so a clone can be handed to
/// each worker thread.
#[derive(Clone)]
pub struct DownloadBars {
    multi: MultiProgress,
    visible: bool,
    theme: TidalTheme,
}

impl DownloadBars {
    /// Bars drawn to stderr, finishing with lines styled by `theme`.
    pub fn new(theme: TidalTheme) -> Self {
        Self {
            multi: MultiProgress::new(),
            visible: true,
            theme,
        }
    }

    /// Bars that draw nothing.
    pub fn hidden() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            visible: false,
            theme: TidalTheme::plain(),
        }
    }

    /// Whether bars are drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Add a bar for one download.
    pub fn add(&self, name: &str) -> DownloadBar {
        let bar = if self.visible {
            self.multi.add(ProgressBar::new_spinner())
        } else {
            ProgressBar::hidden()
        };
        bar.set_prefix(name.to_string());
        if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            bar.set_style(style);
        }
        if self.visible {
            bar.enable_steady_tick(Duration::from_millis(100));
        }

        DownloadBar {
            bar,
            theme: self.theme.clone(),
            name: name.to_string(),
            has_length: false,
            start_time: Instant::now(),
        }
    }
}

/// Progress display for one download.
pub struct DownloadBar {
    bar: ProgressBar,
    theme: TidalTheme,
    name: String,
    has_length: bool,
    start_time: Instant,
}

impl DownloadBar {
    /// Apply a chunk update from the downloader.
    pub fn update(&mut self, progress: &ChunkProgress) {
        if let (Some(total), false) = (progress.total, self.has_length) {
            self.bar.set_length(total);
            if let Ok(style) = ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)
                .map(|s| s.progress_chars("=> "))
            {
                self.bar.set_style(style);
            }
            self.has_length = true;
        }
        self.bar.set_position(progress.bytes);
    }

    /// Current position in bytes.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish with a success line.
    pub fn finish_success(self, detail: &str) {
        let line = self.success_line(detail);
        self.finish_with(line);
    }

    /// Finish with an error line.
    pub fn finish_error(self, error: &str) {
        let line = self.error_line(error);
        self.finish_with(line);
    }

    fn success_line(&self, detail: &str) -> String {
        let msg = format!(
            "{} - {} ({})",
            self.name,
            detail,
            format_duration(self.start_time.elapsed())
        );
        self.theme.format_success(&msg)
    }

    fn error_line(&self, error: &str) -> String {
        self.theme.format_error(&format!("{} - {}", self.name, error))
    }

    fn finish_with(self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

/// Format a duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = secs / 60.0;
        format!("{:.1}m", mins)
    }
}

/// Format a byte count for display.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
