//! Per-instance working directory for logo files

use crate::constants::{LOGO_FILE_NAME, ROTATED_LOGO_FILE_NAME};
use crate::tile::save_pdf;
use crate::types::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::{Logo, load_logo};

/// Private temporary directory holding the working copies of the logo.
///
/// The directory and its files are removed when the workspace is dropped.
#[derive(Debug)]
pub struct LogoWorkspace {
    dir: TempDir,
    logo: Option<Logo>,
}

impl LogoWorkspace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("logo-tile-").tempdir()?;
        log::debug!("Logo workspace at {}", dir.path().display());
        Ok(Self { dir, logo: None })
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Working copy of the uploaded logo
    pub fn logo_path(&self) -> PathBuf {
        self.dir.path().join(LOGO_FILE_NAME)
    }

    /// Last rotated logo
    pub fn rotated_path(&self) -> PathBuf {
        self.dir.path().join(ROTATED_LOGO_FILE_NAME)
    }

    pub fn logo(&self) -> Option<&Logo> {
        self.logo.as_ref()
    }

    /// Copy `source` into the workspace and load it as the current logo.
    ///
    /// Any previous logo and rotation are replaced.
    pub async fn ingest(&mut self, source: impl AsRef<Path>) -> Result<&Logo> {
        let working_copy = self.logo_path();
        tokio::fs::copy(source.as_ref(), &working_copy).await?;

        let logo = load_logo(&working_copy).await?;
        log::info!("Loaded logo from {}", source.as_ref().display());

        Ok(self.logo.insert(logo))
    }

    /// Turn the current logo 90° clockwise and write the result to
    /// [`rotated_path`](Self::rotated_path).
    pub async fn rotate(&mut self) -> Result<&Logo> {
        let current = self
            .logo
            .clone()
            .ok_or_else(|| TileError::Config("No logo loaded".to_string()))?;

        let rotated = tokio::task::spawn_blocking(move || current.rotated_cw()).await??;
        save_pdf(rotated.document().clone(), self.rotated_path()).await?;

        Ok(self.logo.insert(rotated))
    }
}
