use logo_tile::{Logo, LogoWorkspace, SettingsStore};
use logo_tile_runtime::{TileCommand, TileUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Everything the worker owns between commands
pub struct WorkerState {
    workspace: Option<LogoWorkspace>,
    settings: SettingsStore,
}

impl WorkerState {
    pub fn new(update_tx: &mpsc::UnboundedSender<TileUpdate>) -> Self {
        let workspace = match LogoWorkspace::new() {
            Ok(workspace) => Some(workspace),
            Err(e) => {
                let _ = update_tx.send(TileUpdate::Error {
                    message: format!("Failed to create logo workspace: {}", e),
                });
                None
            }
        };

        let settings = SettingsStore::new(handlers::settings::settings_path());
        log::debug!("Page settings at {}", settings.path().display());

        Self {
            workspace,
            settings,
        }
    }

    fn logo(&self) -> Option<&Logo> {
        self.workspace.as_ref().and_then(LogoWorkspace::logo)
    }
}

/// Async worker task that processes tiling commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<TileCommand>,
    update_tx: mpsc::UnboundedSender<TileUpdate>,
) {
    let mut state = WorkerState::new(&update_tx);

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut state, &mut command_rx, &update_tx).await;
    }

    log::debug!("Command channel closed, worker exiting");
}

async fn process_command(
    cmd: TileCommand,
    state: &mut WorkerState,
    command_rx: &mut mpsc::UnboundedReceiver<TileCommand>,
    update_tx: &mpsc::UnboundedSender<TileUpdate>,
) {
    match cmd {
        TileCommand::LoadSettings => {
            handlers::settings::handle_load(&state.settings, update_tx).await;
        }
        TileCommand::SaveSettings { settings } => {
            handlers::settings::handle_save(&state.settings, settings, update_tx).await;
        }
        TileCommand::LoadLogo { path } => match state.workspace.as_mut() {
            Some(workspace) => handlers::logo::handle_load(path, workspace, update_tx).await,
            None => workspace_unavailable(update_tx),
        },
        TileCommand::RotateLogo => match state.workspace.as_mut() {
            Some(workspace) => handlers::logo::handle_rotate(workspace, update_tx).await,
            None => workspace_unavailable(update_tx),
        },
        TileCommand::GeneratePreview { mut options } => {
            // Drain any queued preview commands, keeping only the most recent
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let TileCommand::GeneratePreview {
                    options: new_options,
                } = next_cmd
                {
                    log::debug!("Discarding queued preview generation, using newer request");
                    options = new_options;
                } else {
                    // Since we can't put it back, process it now before the preview
                    Box::pin(process_command(next_cmd, state, command_rx, update_tx)).await;
                }
            }

            handlers::tile::handle_generate_preview(options, state.logo(), update_tx).await;
        }
        TileCommand::Save {
            options,
            output_path,
        } => {
            handlers::tile::handle_save(options, output_path, state.logo(), update_tx).await;
        }
        TileCommand::LoadConfig { path } => {
            handlers::tile::handle_load_config(path, update_tx).await;
        }
        TileCommand::SaveConfig { options, path } => {
            handlers::tile::handle_save_config(options, path, update_tx).await;
        }
        TileCommand::CalculateStats { options } => {
            handlers::tile::handle_calculate_stats(options, state.logo(), update_tx).await;
        }
    }
}

fn workspace_unavailable(update_tx: &mpsc::UnboundedSender<TileUpdate>) {
    let _ = update_tx.send(TileUpdate::Error {
        message: "Logo workspace is not available".to_string(),
    });
}
