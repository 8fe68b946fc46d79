use eframe::egui;
use logo_tile_runtime::{RasterImage, TileCommand, TileUpdate};
use std::path::Path;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::{FormState, PreviewState, show_controls, show_log_panel, show_preview};

pub struct LogoTileApp {
    form: FormState,
    preview: PreviewState,
    status: String,
    progress: Option<String>,
    logger: AppLogger,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<TileCommand>,
    update_rx: mpsc::UnboundedReceiver<TileUpdate>,

    _tokio_handle: tokio::runtime::Handle,
}

impl LogoTileApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        // Page fields start from the saved settings
        let _ = command_tx.send(TileCommand::LoadSettings);

        Self {
            form: FormState::default(),
            preview: PreviewState::default(),
            status: String::new(),
            progress: None,
            logger,
            command_tx,
            update_rx,
            _tokio_handle: tokio_handle,
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });

        if dropped.is_empty() {
            return;
        }

        match dropped.into_iter().find(|path| is_pdf(path)) {
            Some(path) => {
                self.status = format!("Loading {}...", path.display());
                let _ = self.command_tx.send(TileCommand::LoadLogo { path });
            }
            None => self.status = "Only PDF files can be used as a logo".to_string(),
        }
    }

    fn handle_update(&mut self, ctx: &egui::Context, update: TileUpdate) {
        match update {
            TileUpdate::Progress { operation } => {
                self.status = operation.clone();
                self.progress = Some(operation);
                ctx.request_repaint();
                return;
            }
            TileUpdate::SettingsLoaded { settings } => {
                self.form.apply_settings(&settings);
                self.form.needs_preview = self.form.logo_loaded;
                self.status = "Loaded page settings".to_string();
            }
            TileUpdate::SettingsSaved { path } => {
                self.status = format!("Page settings saved → {}", path.display());
            }
            TileUpdate::LogoLoaded { logo } => {
                self.form.apply_logo(&logo);
                set_texture(
                    ctx,
                    &mut self.form.thumbnail,
                    "logo_thumbnail",
                    logo.thumbnail.as_ref(),
                );
                self.status = format!(
                    "Logo loaded: {:.2} × {:.2} cm",
                    logo.natural_size_cm.0, logo.natural_size_cm.1
                );
            }
            TileUpdate::LogoRotated { logo } => {
                self.form.apply_rotation(&logo);
                set_texture(
                    ctx,
                    &mut self.form.thumbnail,
                    "logo_thumbnail",
                    logo.thumbnail.as_ref(),
                );
                self.status = format!("Logo rotated to {}°", logo.rotation.degrees());
            }
            TileUpdate::PreviewRendered { image, stats } => {
                if image.is_none() {
                    self.status = "Preview image unavailable, statistics updated".to_string();
                } else {
                    self.status = format!(
                        "Preview: {} of {} logos placed",
                        stats.placed_tiles, stats.requested_tiles
                    );
                }
                set_texture(ctx, &mut self.preview.texture, "sheet_preview", image.as_ref());
                self.form.stats = Some(stats);
            }
            TileUpdate::Saved { path, stats } => {
                self.status = format!("Saved {} logos → {}", stats.placed_tiles, path.display());
                self.form.stats = Some(stats);
            }
            TileUpdate::ConfigLoaded { options } => {
                self.form.apply_options(&options);
                self.form.needs_preview = self.form.logo_loaded;
                self.status = "Configuration loaded".to_string();
            }
            TileUpdate::ConfigSaved { path } => {
                self.status = format!("Configuration saved → {}", path.display());
            }
            TileUpdate::StatsCalculated { stats } => {
                self.form.stats = Some(stats);
            }
            TileUpdate::Error { message } => {
                log::error!("{}", message);
                self.status = format!("Error: {message}");
            }
        }
        self.progress = None;
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Upload a raster into `slot`, reusing the texture when there is one
fn set_texture(
    ctx: &egui::Context,
    slot: &mut Option<egui::TextureHandle>,
    name: &str,
    image: Option<&RasterImage>,
) {
    let Some(image) = image else {
        *slot = None;
        return;
    };

    let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size(), &image.rgba_data);
    if let Some(texture) = slot {
        texture.set(color_image, egui::TextureOptions::default());
    } else {
        *slot = Some(ctx.load_texture(name, color_image, egui::TextureOptions::default()));
    }
}

impl eframe::App for LogoTileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            self.handle_update(ctx, update);
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.progress.is_some() {
                    ui.spinner();
                    ctx.request_repaint(); // Keep updating during operations
                }
                ui.label(&self.status);
            });
            show_log_panel(ui, &self.logger);
        });

        egui::SidePanel::left("tile_controls")
            .min_width(320.0)
            .show(ctx, |ui| {
                show_controls(ui, &mut self.form, &self.command_tx);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_preview(ui, &mut self.preview, self.form.logo_loaded);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pdf_files_are_accepted() {
        assert!(is_pdf(Path::new("logo.pdf")));
        assert!(is_pdf(Path::new("/tmp/LOGO.PDF")));
        assert!(!is_pdf(Path::new("logo.svg")));
        assert!(!is_pdf(Path::new("logo")));
    }
}
