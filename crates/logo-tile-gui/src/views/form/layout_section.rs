use eframe::egui;

use super::state::FormState;
use crate::ui_components::labeled_text_field;

pub fn show(ui: &mut egui::Ui, state: &mut FormState) {
    ui.label(egui::RichText::new("Tiles").strong());

    let mut changed = false;
    changed |= labeled_text_field(ui, "Logo count:", &mut state.count, "", None);
    changed |= labeled_text_field(ui, "Spacing X:", &mut state.spacing_x, "cm", None);
    changed |= labeled_text_field(ui, "Spacing Y:", &mut state.spacing_y, "cm", None);

    ui.horizontal(|ui| {
        changed |= ui
            .checkbox(&mut state.background_enabled, "Background")
            .changed();
        ui.add_enabled_ui(state.background_enabled, |ui| {
            changed |= ui.color_edit_button_srgb(&mut state.background).changed();
        });
    });

    if changed {
        state.needs_preview = true;
    }
}
