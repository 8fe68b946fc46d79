use eframe::egui;

use crate::ui_components::SliderBuilder;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 16.0;

/// The rendered sheet and how it is being viewed
pub struct PreviewState {
    pub texture: Option<egui::TextureHandle>,
    pub zoom: f32,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            texture: None,
            zoom: 1.0,
        }
    }
}

impl PreviewState {
    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

pub fn show_preview(ui: &mut egui::Ui, state: &mut PreviewState, logo_loaded: bool) {
    let Some(texture) = state.texture.clone() else {
        ui.centered_and_justified(|ui| {
            ui.vertical_centered(|ui| {
                if logo_loaded {
                    ui.heading("Ready to Generate");
                    ui.label("Click 'Generate Preview' to see the tiled sheet");
                } else {
                    ui.heading("No Logo");
                    ui.label("Drop a PDF logo here to begin");
                }
            });
        });
        return;
    };

    let image_size = texture.size_vec2();

    ui.horizontal(|ui| {
        SliderBuilder::new(&mut state.zoom, MIN_ZOOM..=MAX_ZOOM)
            .text("Zoom")
            .suffix("×")
            .logarithmic(true)
            .show(ui);

        if ui.button("Fit").clicked() {
            let fit = ui.available_width() / image_size.x.max(1.0);
            state.set_zoom(fit);
        }
        if ui.button("1:1").clicked() {
            state.set_zoom(1.0);
        }
    });
    ui.separator();

    let response = egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add(egui::Image::new(egui::load::SizedTexture::new(
                texture.id(),
                image_size * state.zoom,
            )));
        });

    // Ctrl + scroll or pinch over the sheet
    if ui.rect_contains_pointer(response.inner_rect) {
        let delta = ui.input(|i| i.zoom_delta());
        if delta != 1.0 {
            state.set_zoom(state.zoom * delta);
        }
    }
}
