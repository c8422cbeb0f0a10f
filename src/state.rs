use std::path::{Path, PathBuf};

use crate::data::model::{Summary, Values};

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// Everything the viewer shows, independent of rendering.
pub struct ViewerState {
    /// File the values were read from.
    pub source: PathBuf,

    /// The parsed series. Never changes after startup.
    pub values: Values,

    /// Cached statistics for the status bar.
    pub summary: Option<Summary>,

    /// Set by "Reset view"; consumed by the next plot frame.
    pub reset_view: bool,
}

impl ViewerState {
    pub fn new(source: PathBuf, values: Values) -> Self {
        let summary = values.summary();
        Self {
            source,
            values,
            summary,
            reset_view: false,
        }
    }

    /// File name for titles and the status bar, falling back to the full path.
    pub fn source_name(&self) -> String {
        display_name(&self.source)
    }

    /// Ask the plot to re-fit its bounds to the data.
    pub fn request_reset_view(&mut self) {
        log::debug!("Resetting plot view");
        self.reset_view = true;
    }

    /// Returns whether a reset was pending and clears it.
    pub fn take_reset_view(&mut self) -> bool {
        std::mem::take(&mut self.reset_view)
    }

    /// One-line description of the loaded data.
    pub fn status_line(&self) -> String {
        let n = self.values.len();
        let noun = if n == 1 { "value" } else { "values" };
        match &self.summary {
            Some(summary) if summary.count < n => format!(
                "{}  |  {n} {noun} ({} finite)  |  {summary}",
                self.source_name(),
                summary.count
            ),
            Some(summary) => format!("{}  |  {n} {noun}  |  {summary}", self.source_name()),
            None => format!("{}  |  {n} {noun}", self.source_name()),
        }
    }
}

/// Window title for a given input file.
pub fn window_title(path: &Path) -> String {
    format!("plotvals – {}", display_name(path))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
