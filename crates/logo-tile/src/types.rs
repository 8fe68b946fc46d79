use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Document has no pages")]
    NoPages,
    #[error("No tile fits across the page: {available_cm:.2}cm available, tile is {tile_cm:.2}cm")]
    NoTileFits { available_cm: f32, tile_cm: f32 },
    #[error("Invalid colour: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, TileError>;

/// Quarter-turn rotation state of the logo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }

    /// Number of clockwise quarter turns from upright
    pub fn quarter_turns(self) -> usize {
        (self.degrees() / 90) as usize
    }

    pub fn from_quarter_turns(turns: usize) -> Self {
        match turns % 4 {
            0 => Rotation::None,
            1 => Rotation::Clockwise90,
            2 => Rotation::Clockwise180,
            _ => Rotation::Clockwise270,
        }
    }

    /// The state after one more 90° clockwise turn
    pub fn next_clockwise(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 1)
    }

    /// Clockwise quarter turns needed to go from `self` to `target`
    pub fn turns_to(self, target: Rotation) -> usize {
        (target.quarter_turns() + 4 - self.quarter_turns()) % 4
    }

    /// Whether width and height are exchanged relative to upright
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Clockwise90 | Rotation::Clockwise270)
    }
}

/// How the requested logo size maps onto the placed tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileSizing {
    /// Place the whole host page; the tile rect is inflated by the
    /// page-to-logo ratio so the logo itself lands at the requested size.
    #[default]
    HostPage,
    /// Crop to the logo's bounding box; the tile rect is the requested size.
    LogoBounds,
}

/// Statistics about a tiling run
#[derive(Debug, Clone, PartialEq)]
pub struct TilingStatistics {
    /// Tiles the user asked for
    pub requested_tiles: usize,
    /// Tiles that actually fit on the page
    pub placed_tiles: usize,
    /// Tiles placed before wrapping to a new row
    pub tiles_per_row: usize,
    /// Rows containing at least one tile
    pub rows: usize,
    /// Tile rect width after sizing correction
    pub tile_width_cm: f32,
    /// Tile rect height after sizing correction
    pub tile_height_cm: f32,
    /// Output page width
    pub page_width_cm: f32,
    /// Output page height (computed when auto-height is used)
    pub page_height_cm: f32,
    /// Whether the page height was back-solved from the tile count
    pub auto_height: bool,
}

impl TilingStatistics {
    /// Tiles that were requested but did not fit
    pub fn dropped_tiles(&self) -> usize {
        self.requested_tiles.saturating_sub(self.placed_tiles)
    }
}
