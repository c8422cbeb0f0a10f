mod app;
mod data;
mod state;
mod ui;

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use app::PlotValsApp;
use eframe::egui;
use state::ViewerState;

fn main() -> Result<()> {
    env_logger::init();

    let path = input_path(std::env::args_os())?;

    // Any load failure is fatal and happens before a window exists.
    let values = data::loader::load_file(&path)
        .inspect_err(|e| log::error!("Failed to load values: {e}"))
        .with_context(|| format!("loading values from {}", path.display()))?;
    log::info!("Loaded {} values from {}", values.len(), path.display());
    if values.is_empty() {
        log::warn!("{} holds no values; plotting an empty series", path.display());
    }

    let title = state::window_title(&path);
    let state = ViewerState::new(path, values);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    // Blocks until the viewer window is closed.
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(PlotValsApp::new(state)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}

/// The single positional argument: the file to plot. Anything after it is ignored.
fn input_path<I>(args: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "plotvals".to_string());
    args.next()
        .map(PathBuf::from)
        .with_context(|| format!("usage: {program} <FILE>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn first_positional_argument_is_the_path() {
        let path = input_path(args(&["plotvals", "series.txt"])).unwrap();
        assert_eq!(path, PathBuf::from("series.txt"));
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let path = input_path(args(&["plotvals", "a.txt", "b.txt"])).unwrap();
        assert_eq!(path, PathBuf::from("a.txt"));
    }

    #[test]
    fn missing_path_reports_usage() {
        let err = input_path(args(&["plotvals"])).unwrap_err();
        assert_eq!(err.to_string(), "usage: plotvals <FILE>");
    }
}
