use logo_tile::{PageSettings, SettingsStore};
use logo_tile_runtime::TileUpdate;
use std::path::PathBuf;
use tokio::sync::mpsc;

pub const SETTINGS_FILE_NAME: &str = "page_settings.txt";

/// Per-user config directory, or the working directory if there is none
pub fn settings_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "logo-tile")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
}

pub async fn handle_load(store: &SettingsStore, update_tx: &mpsc::UnboundedSender<TileUpdate>) {
    let settings = store.load().await;
    let _ = update_tx.send(TileUpdate::SettingsLoaded { settings });
}

pub async fn handle_save(
    store: &SettingsStore,
    settings: PageSettings,
    update_tx: &mpsc::UnboundedSender<TileUpdate>,
) {
    match store.save(&settings).await {
        Ok(()) => {
            log::info!("Page settings saved to {}", store.path().display());
            let _ = update_tx.send(TileUpdate::SettingsSaved {
                path: store.path().to_path_buf(),
            });
        }
        Err(e) => {
            let _ = update_tx.send(TileUpdate::Error {
                message: format!("Failed to save settings: {}", e),
            });
        }
    }
}
