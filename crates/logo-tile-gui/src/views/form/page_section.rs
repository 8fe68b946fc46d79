use eframe::egui;
use logo_tile_runtime::TileCommand;
use tokio::sync::mpsc;

use super::state::FormState;
use crate::ui_components::labeled_text_field;

pub fn show(
    ui: &mut egui::Ui,
    state: &mut FormState,
    command_tx: &mpsc::UnboundedSender<TileCommand>,
) {
    ui.label(egui::RichText::new("Page").strong());

    let mut changed = false;
    changed |= labeled_text_field(ui, "Width:", &mut state.page_width, "cm", None);
    changed |= labeled_text_field(ui, "Height:", &mut state.page_height, "cm", Some("auto"));
    changed |= labeled_text_field(ui, "Left margin:", &mut state.margin_left, "cm", None);
    changed |= labeled_text_field(ui, "Right margin:", &mut state.margin_right, "cm", None);
    changed |= labeled_text_field(ui, "Top margin:", &mut state.margin_top, "cm", None);

    if changed {
        state.needs_preview = true;
    }

    if ui
        .button("💾 Save Page Settings")
        .on_hover_text("Remember page size and margins for next time")
        .clicked()
    {
        match state.page_settings() {
            Ok(settings) => {
                state.error = None;
                let _ = command_tx.send(TileCommand::SaveSettings { settings });
            }
            Err(e) => state.error = Some(e),
        }
    }
}
