use logo_tile::tile::document_to_bytes;
use logo_tile::{Logo, TileOptions, calculate_statistics, tile, tile_to_file};
use logo_tile_runtime::TileUpdate;
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::preview;

fn require_logo<'a>(
    logo: Option<&'a Logo>,
    update_tx: &mpsc::UnboundedSender<TileUpdate>,
) -> Option<&'a Logo> {
    if logo.is_none() {
        let _ = update_tx.send(TileUpdate::Error {
            message: "Load a logo first".to_string(),
        });
    }
    logo
}

pub async fn handle_generate_preview(
    options: TileOptions,
    logo: Option<&Logo>,
    update_tx: &mpsc::UnboundedSender<TileUpdate>,
) {
    let Some(logo) = require_logo(logo, update_tx) else {
        return;
    };

    let _ = update_tx.send(TileUpdate::Progress {
        operation: "Generating preview".to_string(),
    });

    let sheet = match tile(logo, &options).await {
        Ok(sheet) => sheet,
        Err(e) => {
            let _ = update_tx.send(TileUpdate::Error {
                message: format!("Failed to generate preview: {}", e),
            });
            return;
        }
    };

    let stats = sheet.statistics;
    let document = sheet.document;
    match tokio::task::spawn_blocking(move || {
        document_to_bytes(document).map(|bytes| preview::render_sheet(&bytes))
    })
    .await
    {
        Ok(Ok(image)) => {
            log::info!(
                "Preview: {} of {} tiles on {:.1} x {:.1} cm",
                stats.placed_tiles,
                stats.requested_tiles,
                stats.page_width_cm,
                stats.page_height_cm
            );
            let _ = update_tx.send(TileUpdate::PreviewRendered { image, stats });
        }
        Ok(Err(e)) => {
            let _ = update_tx.send(TileUpdate::Error {
                message: format!("Failed to serialize preview: {}", e),
            });
        }
        Err(e) => {
            let _ = update_tx.send(TileUpdate::Error {
                message: format!("Task join error: {}", e),
            });
        }
    }
}

pub async fn handle_save(
    options: TileOptions,
    output_path: PathBuf,
    logo: Option<&Logo>,
    update_tx: &mpsc::UnboundedSender<TileUpdate>,
) {
    let Some(logo) = require_logo(logo, update_tx) else {
        return;
    };

    let _ = update_tx.send(TileUpdate::Progress {
        operation: format!("Saving {}", output_path.display()),
    });

    match tile_to_file(logo, &options, &output_path).await {
        Ok(stats) => {
            let _ = update_tx.send(TileUpdate::Saved {
                path: output_path,
                stats,
            });
        }
        Err(e) => {
            let _ = update_tx.send(TileUpdate::Error {
                message: format!("Failed to save tiled PDF: {}", e),
            });
        }
    }
}

pub async fn handle_load_config(path: PathBuf, update_tx: &mpsc::UnboundedSender<TileUpdate>) {
    match TileOptions::load(&path).await {
        Ok(options) => {
            log::info!("Configuration loaded from {}", path.display());
            let _ = update_tx.send(TileUpdate::ConfigLoaded { options });
        }
        Err(e) => {
            let _ = update_tx.send(TileUpdate::Error {
                message: format!("Failed to load configuration: {}", e),
            });
        }
    }
}

pub async fn handle_save_config(
    options: TileOptions,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<TileUpdate>,
) {
    match options.save(&path).await {
        Ok(()) => {
            log::info!("Configuration saved to {}", path.display());
            let _ = update_tx.send(TileUpdate::ConfigSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(TileUpdate::Error {
                message: format!("Failed to save configuration: {}", e),
            });
        }
    }
}

pub async fn handle_calculate_stats(
    options: TileOptions,
    logo: Option<&Logo>,
    update_tx: &mpsc::UnboundedSender<TileUpdate>,
) {
    let Some(logo) = require_logo(logo, update_tx) else {
        return;
    };

    let logo = logo.clone();
    match tokio::task::spawn_blocking(move || {
        let logo = logo.with_rotation(options.logo.rotation)?;
        calculate_statistics(logo.metrics(), &options)
    })
    .await
    {
        Ok(Ok(stats)) => {
            let _ = update_tx.send(TileUpdate::StatsCalculated { stats });
        }
        Ok(Err(e)) => {
            let _ = update_tx.send(TileUpdate::Error {
                message: format!("Failed to calculate statistics: {}", e),
            });
        }
        Err(e) => {
            let _ = update_tx.send(TileUpdate::Error {
                message: format!("Task join error: {}", e),
            });
        }
    }
}
