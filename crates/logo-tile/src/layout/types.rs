//! Layout data types for tiling
//!
//! These types represent the intermediate layout calculations between
//! the user's options and PDF rendering.

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from two opposite corners in any order
    pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(x0.min(x1), y0.min(y1), (x1 - x0).abs(), (y1 - y0).abs())
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether `self` covers `other` up to `tolerance` on every edge
    pub fn covers(&self, other: &Rect, tolerance: f32) -> bool {
        self.x <= other.x + tolerance
            && self.y <= other.y + tolerance
            && self.right() >= other.right() - tolerance
            && self.top() >= other.top() - tolerance
    }
}

/// Growing bounding box over transformed points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    extent: Option<(f32, f32, f32, f32)>,
}

impl Bounds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, x: f32, y: f32) {
        self.extent = Some(match self.extent {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    pub fn union(&mut self, other: &Bounds) {
        if let Some((x0, y0, x1, y1)) = other.extent {
            self.add_point(x0, y0);
            self.add_point(x1, y1);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.extent.is_none()
    }

    pub fn clear(&mut self) {
        self.extent = None;
    }

    pub fn to_rect(&self) -> Option<Rect> {
        self.extent
            .map(|(x0, y0, x1, y1)| Rect::from_corners(x0, y0, x1, y1))
    }
}

/// Geometric inputs to grid packing, all in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub page_width: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub tile_width: f32,
    pub tile_height: f32,
    pub spacing_x: f32,
    pub spacing_y: f32,
}

/// Final placement of one logo copy on the output page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    /// Order in which the tile was placed
    pub index: usize,
    /// Where it sits in the grid
    pub grid_pos: GridPosition,
    /// Tile rect in PDF space (bottom-left origin)
    pub rect: Rect,
}

/// Result of packing tiles onto a page
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlan {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub tile_width_pt: f32,
    pub tile_height_pt: f32,
    pub tiles_per_row: usize,
    pub requested: usize,
    pub auto_height: bool,
    pub placements: Vec<TilePlacement>,
}

impl TilePlan {
    pub fn placed(&self) -> usize {
        self.placements.len()
    }

    /// Rows that contain at least one tile
    pub fn rows_used(&self) -> usize {
        self.placements
            .last()
            .map(|p| p.grid_pos.row + 1)
            .unwrap_or(0)
    }

    /// Whether fewer tiles fit than were requested
    pub fn is_truncated(&self) -> bool {
        self.placed() < self.requested
    }
}

/// Measured geometry of a logo's host page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoMetrics {
    /// MediaBox of the host page
    pub page_box: Rect,
    /// Union of everything painted on the page
    pub bounds: Rect,
}

impl LogoMetrics {
    pub fn new(page_box: Rect, bounds: Rect) -> Self {
        Self { page_box, bounds }
    }

    /// Bounding-box size in centimeters
    pub fn natural_size_cm(&self) -> (f32, f32) {
        (
            crate::constants::pt_to_cm(self.bounds.width),
            crate::constants::pt_to_cm(self.bounds.height),
        )
    }

    pub fn page_size_cm(&self) -> (f32, f32) {
        (
            crate::constants::pt_to_cm(self.page_box.width),
            crate::constants::pt_to_cm(self.page_box.height),
        )
    }

    /// Per-axis ratio of host page size to logo size.
    ///
    /// An empty axis in the bounds yields 1.0 on that axis.
    pub fn host_scale(&self) -> (f32, f32) {
        let ratio = |page: f32, logo: f32| if logo > 0.0 { page / logo } else { 1.0 };
        (
            ratio(self.page_box.width, self.bounds.width),
            ratio(self.page_box.height, self.bounds.height),
        )
    }
}
