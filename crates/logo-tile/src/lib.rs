pub mod color;
pub mod constants;
pub mod layout;
pub mod logo;
mod options;
pub mod render;
pub mod settings;
mod stats;
pub mod tile;
mod types;

pub use color::HexColor;
pub use layout::{LogoMetrics, TilePlan};
pub use logo::{Logo, LogoWorkspace, load_logo};
pub use options::*;
pub use settings::{PageSettings, SettingsStore};
pub use stats::calculate_statistics;
pub use tile::{ComposedSheet, compose_sheet, load_pdf, save_pdf, tile, tile_to_file};
pub use types::*;
