mod actions_section;
mod layout_section;
mod logo_section;
mod page_section;
mod state;
mod statistics_section;

pub use state::FormState;

use eframe::egui;
use logo_tile_runtime::TileCommand;
use tokio::sync::mpsc;

pub fn show_controls(
    ui: &mut egui::Ui,
    state: &mut FormState,
    command_tx: &mpsc::UnboundedSender<TileCommand>,
) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Logo Tiler");
        ui.separator();

        logo_section::show(ui, state, command_tx);
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        page_section::show(ui, state, command_tx);
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        layout_section::show(ui, state);
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        statistics_section::show(ui, state, command_tx);
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        if let Some(error) = &state.error {
            ui.colored_label(ui.visuals().error_fg_color, error.to_string());
            ui.add_space(5.0);
        }

        actions_section::show(ui, state, command_tx);
    });
}

/// Ask the worker for a fresh preview of the current fields
pub(crate) fn request_preview(
    state: &mut FormState,
    command_tx: &mpsc::UnboundedSender<TileCommand>,
) {
    state.needs_preview = false;
    match state.to_options() {
        Ok(options) => {
            state.error = None;
            let _ = command_tx.send(TileCommand::GeneratePreview { options });
        }
        Err(e) => state.error = Some(e),
    }
}
