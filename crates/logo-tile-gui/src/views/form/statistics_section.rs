use eframe::egui;
use logo_tile_runtime::TileCommand;
use tokio::sync::mpsc;

use super::state::{FormState, format_cm};

pub fn show(
    ui: &mut egui::Ui,
    state: &mut FormState,
    command_tx: &mpsc::UnboundedSender<TileCommand>,
) {
    egui::CollapsingHeader::new("📊 Statistics")
        .default_open(true)
        .show(ui, |ui| {
            if let Some(stats) = &state.stats {
                ui.label(format!(
                    "Page: {} × {} cm{}",
                    format_cm(stats.page_width_cm),
                    format_cm(stats.page_height_cm),
                    if stats.auto_height { " (auto)" } else { "" }
                ));
                ui.label(format!(
                    "Tile: {} × {} cm",
                    format_cm(stats.tile_width_cm),
                    format_cm(stats.tile_height_cm)
                ));
                ui.label(format!("Tiles per row: {}", stats.tiles_per_row));
                ui.label(format!("Rows: {}", stats.rows));
                ui.label(format!(
                    "Tiles placed: {} of {}",
                    stats.placed_tiles, stats.requested_tiles
                ));

                if stats.dropped_tiles() > 0 {
                    ui.colored_label(
                        ui.visuals().warn_fg_color,
                        format!("{} tiles did not fit on the page", stats.dropped_tiles()),
                    );
                }
            } else {
                ui.label("No statistics available");
                ui.label("Load a logo to see how the sheet fills");
            }

            if ui
                .add_enabled(state.logo_loaded, egui::Button::new("↻ Recalculate"))
                .clicked()
            {
                match state.to_options() {
                    Ok(options) => {
                        state.error = None;
                        let _ = command_tx.send(TileCommand::CalculateStats { options });
                    }
                    Err(e) => state.error = Some(e),
                }
            }
        });
}
