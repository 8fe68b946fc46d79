//! Shared constants for logo tiling
//!
//! This module centralizes magic numbers and constants used throughout
//! the layout and composition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per centimeter (1 inch = 72 points, 1 inch = 2.54cm)
pub const POINTS_PER_CM: f32 = 72.0 / 2.54; // ≈ 28.3465

/// Convert centimeters to points
#[inline]
pub fn cm_to_pt(cm: f32) -> f32 {
    cm * POINTS_PER_CM
}

/// Convert points to centimeters
#[inline]
pub fn pt_to_cm(pt: f32) -> f32 {
    pt / POINTS_PER_CM
}

// =============================================================================
// Layout
// =============================================================================

/// Extra space added below the last row when the page height is computed
/// from the tile count (points).
pub const AUTO_HEIGHT_PADDING_PT: f32 = 50.0;

/// Slack used when comparing accumulated float geometry (points).
pub const LAYOUT_EPSILON_PT: f32 = 1e-3;

/// Slack applied before flooring the tiles-per-row quotient.
pub const PER_ROW_EPSILON: f32 = 1e-4;

/// Tolerance when deciding whether a rectangle covers the whole page (points).
pub const FULL_PAGE_TOLERANCE_PT: f32 = 1.0;

/// Colour components at or above this are treated as white.
pub const WHITE_THRESHOLD: f32 = 0.999;

/// Maximum nesting depth followed when walking Form XObjects.
pub const MAX_FORM_DEPTH: usize = 16;

/// Largest page edge PDF viewers accept (points, 200 inches).
pub const MAX_PAGE_DIMENSION_PT: f32 = 14400.0;

/// Upper bound on tiles laid out on one sheet.
pub const MAX_TILE_PLACEMENTS: usize = 100_000;

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Form Defaults
// =============================================================================

/// Output sheet width used when nothing else is configured (cm)
pub const DEFAULT_SHEET_WIDTH_CM: f32 = 58.0;

/// Left, right and top sheet margin default (cm)
pub const DEFAULT_SHEET_MARGIN_CM: f32 = 0.1;

/// Default logo tile edge (cm)
pub const DEFAULT_TILE_SIZE_CM: f32 = 10.0;

/// Default spacing between tiles on both axes (cm)
pub const DEFAULT_TILE_SPACING_CM: f32 = 1.0;

/// Default number of tiles requested
pub const DEFAULT_TILE_COUNT: usize = 10;

// =============================================================================
// Working Files
// =============================================================================

/// Name of the ingested logo copy inside the workspace
pub const LOGO_FILE_NAME: &str = "temp_logo.pdf";

/// Name of the rotated logo inside the workspace
pub const ROTATED_LOGO_FILE_NAME: &str = "temp_rotated_90.pdf";

/// XObject resource name used for the logo on the output page
pub const LOGO_XOBJECT_NAME: &str = "Logo";
