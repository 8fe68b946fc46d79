use logo_tile::tile::document_to_bytes;
use logo_tile::{Logo, LogoWorkspace};
use logo_tile_runtime::{LogoInfo, TileUpdate};
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::preview;

pub async fn handle_load(
    path: PathBuf,
    workspace: &mut LogoWorkspace,
    update_tx: &mpsc::UnboundedSender<TileUpdate>,
) {
    let _ = update_tx.send(TileUpdate::Progress {
        operation: format!("Loading {}", path.display()),
    });

    match workspace.ingest(&path).await {
        Ok(logo) => {
            let logo = describe(logo).await;
            let _ = update_tx.send(TileUpdate::LogoLoaded { logo });
        }
        Err(e) => {
            let _ = update_tx.send(TileUpdate::Error {
                message: format!("Failed to load logo: {}", e),
            });
        }
    }
}

pub async fn handle_rotate(
    workspace: &mut LogoWorkspace,
    update_tx: &mpsc::UnboundedSender<TileUpdate>,
) {
    let _ = update_tx.send(TileUpdate::Progress {
        operation: "Rotating logo".to_string(),
    });

    match workspace.rotate().await {
        Ok(logo) => {
            log::info!("Logo rotated to {}°", logo.rotation().degrees());
            let logo = describe(logo).await;
            let _ = update_tx.send(TileUpdate::LogoRotated { logo });
        }
        Err(e) => {
            let _ = update_tx.send(TileUpdate::Error {
                message: format!("Failed to rotate logo: {}", e),
            });
        }
    }
}

/// Measured size, orientation and a thumbnail of the current logo
async fn describe(logo: &Logo) -> LogoInfo {
    let document = logo.document().clone();
    let thumbnail = tokio::task::spawn_blocking(move || match document_to_bytes(document) {
        Ok(bytes) => preview::render_thumbnail(&bytes),
        Err(e) => {
            log::warn!("Could not serialize logo for its thumbnail: {}", e);
            None
        }
    })
    .await
    .unwrap_or_else(|e| {
        log::warn!("Thumbnail task failed: {}", e);
        None
    });

    LogoInfo {
        natural_size_cm: logo.natural_size_cm(),
        rotation: logo.rotation(),
        thumbnail,
    }
}
