use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::ViewerState;

/// Fixed label of the y-axis.
pub const Y_AXIS_LABEL: &str = "values";

// ---------------------------------------------------------------------------
// Values plot (central panel)
// ---------------------------------------------------------------------------

/// Render the values as a single line: x is the index, y the value.
///
/// An empty series still draws the (empty) plot frame.
pub fn values_plot(ui: &mut Ui, state: &mut ViewerState) {
    let mut plot = Plot::new("values_plot")
        .y_axis_label(Y_AXIS_LABEL)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if state.take_reset_view() {
        plot = plot.reset();
    }

    let points: PlotPoints = state.values.points().into_iter().collect();

    plot.show(ui, |plot_ui| {
        let line = Line::new(points)
            .color(Color32::LIGHT_BLUE)
            .width(1.5);

        plot_ui.line(line);
    });
}
