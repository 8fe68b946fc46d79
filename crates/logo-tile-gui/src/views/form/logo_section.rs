use eframe::egui;
use logo_tile::TileSizing;
use logo_tile_runtime::TileCommand;
use tokio::sync::mpsc;

use super::state::FormState;
use crate::ui_components::{enum_selector, labeled_text_field};

pub fn show(
    ui: &mut egui::Ui,
    state: &mut FormState,
    command_tx: &mpsc::UnboundedSender<TileCommand>,
) {
    ui.label(egui::RichText::new("Logo").strong());

    ui.horizontal(|ui| {
        if ui.button("📂 Load Logo...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PDF", &["pdf"])
                .pick_file()
            {
                let _ = command_tx.send(TileCommand::LoadLogo { path });
            }
        }

        if ui
            .add_enabled(state.logo_loaded, egui::Button::new("⟳ Rotate 90°"))
            .clicked()
        {
            let _ = command_tx.send(TileCommand::RotateLogo);
        }
    });

    if let Some(thumbnail) = &state.thumbnail {
        ui.add(egui::Image::new(egui::load::SizedTexture::new(
            thumbnail.id(),
            thumbnail.size_vec2(),
        )));
    } else if !state.logo_loaded {
        ui.label("Drop a PDF here or use Load Logo");
    }

    if let Some((width, height)) = state.logo.natural_size_cm {
        ui.label(format!("Measured: {:.2} × {:.2} cm", width, height));
    }

    ui.add_space(5.0);

    if labeled_text_field(ui, "Width:", &mut state.logo_width, "cm", None) {
        state.logo_width_edited();
        state.needs_preview = true;
    }

    if labeled_text_field(ui, "Height:", &mut state.logo_height, "cm", None) {
        state.logo_height_edited();
        state.needs_preview = true;
    }

    let lock_label = if state.logo.is_locked() {
        "🔒 Aspect locked"
    } else {
        "🔓 Aspect free"
    };
    if ui
        .selectable_label(state.logo.is_locked(), lock_label)
        .on_hover_text("Keep width and height proportional")
        .clicked()
    {
        state.toggle_lock();
    }

    if enum_selector(
        ui,
        "tile_sizing",
        "Sizing:",
        &mut state.sizing,
        &[
            (TileSizing::HostPage, "Whole logo page"),
            (TileSizing::LogoBounds, "Logo bounds only"),
        ],
    ) {
        state.needs_preview = true;
    }
}
