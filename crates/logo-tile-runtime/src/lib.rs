use std::path::PathBuf;

// Re-export types from the library crate
pub use logo_tile::{PageSettings, Rotation, TileOptions, TilingStatistics};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum TileCommand {
    LoadSettings,
    SaveSettings {
        settings: PageSettings,
    },
    LoadLogo {
        path: PathBuf,
    },
    RotateLogo,
    /// Render the sheet for the preview pane. Only the newest queued
    /// request is processed.
    GeneratePreview {
        options: TileOptions,
    },
    Save {
        options: TileOptions,
        output_path: PathBuf,
    },
    LoadConfig {
        path: PathBuf,
    },
    SaveConfig {
        options: TileOptions,
        path: PathBuf,
    },
    CalculateStats {
        options: TileOptions,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum TileUpdate {
    Progress {
        operation: String,
    },
    SettingsLoaded {
        settings: PageSettings,
    },
    SettingsSaved {
        path: PathBuf,
    },
    LogoLoaded {
        logo: LogoInfo,
    },
    LogoRotated {
        logo: LogoInfo,
    },
    PreviewRendered {
        /// `None` when no rasterizer is available
        image: Option<RasterImage>,
        stats: TilingStatistics,
    },
    Saved {
        path: PathBuf,
        stats: TilingStatistics,
    },
    ConfigLoaded {
        options: TileOptions,
    },
    ConfigSaved {
        path: PathBuf,
    },
    StatsCalculated {
        stats: TilingStatistics,
    },
    Error {
        message: String,
    },
}

/// What the form needs to know about the current logo
#[derive(Debug, Clone)]
pub struct LogoInfo {
    pub natural_size_cm: (f32, f32),
    pub rotation: Rotation,
    pub thumbnail: Option<RasterImage>,
}

/// RGBA8 pixels, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: usize,
    pub height: usize,
    pub rgba_data: Vec<u8>,
}

impl RasterImage {
    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }
}
