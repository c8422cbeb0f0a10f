use eframe::egui::{self, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu bar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Quit").clicked() {
                log::debug!("Quit requested from menu");
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.menu_button("View", |ui: &mut Ui| {
            if ui.button("Reset view").clicked() {
                state.request_reset_view();
                ui.close_menu();
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

/// Render the bottom status bar: file name, point count, statistics.
pub fn status_bar(ui: &mut Ui, state: &ViewerState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(state.status_line());
    });
}
