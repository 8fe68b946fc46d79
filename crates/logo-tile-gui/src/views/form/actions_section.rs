use eframe::egui;
use logo_tile_runtime::TileCommand;
use tokio::sync::mpsc;

use super::request_preview;
use super::state::FormState;

pub fn show(
    ui: &mut egui::Ui,
    state: &mut FormState,
    command_tx: &mpsc::UnboundedSender<TileCommand>,
) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            show_config_buttons(ui, state, command_tx);
        });

        ui.add_space(10.0);

        if ui
            .add_enabled(state.logo_loaded, egui::Button::new("📄 Generate Preview"))
            .clicked()
        {
            request_preview(state, command_tx);
        }

        ui.add_space(5.0);

        show_save_button(ui, state, command_tx);

        if state.needs_preview && state.logo_loaded {
            request_preview(state, command_tx);
        }
    });
}

fn show_config_buttons(
    ui: &mut egui::Ui,
    state: &mut FormState,
    command_tx: &mpsc::UnboundedSender<TileCommand>,
) {
    if ui.button("💾 Save Configuration").clicked() {
        match state.to_options() {
            Ok(options) => {
                state.error = None;
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .set_file_name("logo_tile.json")
                    .save_file()
                {
                    let _ = command_tx.send(TileCommand::SaveConfig { options, path });
                }
            }
            Err(e) => state.error = Some(e),
        }
    }

    if ui.button("📂 Load Configuration").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            let _ = command_tx.send(TileCommand::LoadConfig { path });
        }
    }
}

fn show_save_button(
    ui: &mut egui::Ui,
    state: &mut FormState,
    command_tx: &mpsc::UnboundedSender<TileCommand>,
) {
    if ui
        .add_enabled(state.logo_loaded, egui::Button::new("💾 Save PDF As..."))
        .clicked()
    {
        let options = match state.to_options() {
            Ok(options) => options,
            Err(e) => {
                state.error = Some(e);
                return;
            }
        };
        state.error = None;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name("tiled_logos.pdf")
            .save_file()
        {
            log::info!("Saving tiled PDF to: {}", path.display());
            let _ = command_tx.send(TileCommand::Save {
                options,
                output_path: path,
            });
        }
    }
}
