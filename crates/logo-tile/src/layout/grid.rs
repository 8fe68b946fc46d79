//! Grid packing
//!
//! Row-major placement of uniform tiles starting at the top-left margin
//! corner, wrapping after `tiles_per_row` tiles and stopping when the
//! requested count is placed or the next row would cross the bottom margin.

use crate::constants::{
    AUTO_HEIGHT_PADDING_PT, LAYOUT_EPSILON_PT, MAX_PAGE_DIMENSION_PT, MAX_TILE_PLACEMENTS,
    PER_ROW_EPSILON, pt_to_cm,
};
use crate::types::{Result, TileError};

use super::{GridPosition, GridSpec, Rect, TilePlacement, TilePlan};

// =============================================================================
// Row Capacity
// =============================================================================

/// Number of tiles that fit across the page.
///
/// `floor((page_width - margin_left - margin_right + spacing_x) / (tile_width + spacing_x))`
///
/// Fails with [`TileError::NoTileFits`] when not even one tile fits.
pub fn tiles_per_row(spec: &GridSpec) -> Result<usize> {
    let available = spec.page_width - spec.margin_left - spec.margin_right;
    let pitch = spec.tile_width + spec.spacing_x;

    let per_row = if pitch > 0.0 {
        ((available + spec.spacing_x) / pitch + PER_ROW_EPSILON).floor()
    } else {
        0.0
    };

    if per_row < 1.0 {
        return Err(TileError::NoTileFits {
            available_cm: pt_to_cm(available),
            tile_cm: pt_to_cm(spec.tile_width),
        });
    }

    Ok(per_row as usize)
}

// =============================================================================
// Auto Height
// =============================================================================

/// Minimum page height (points) that holds `count` tiles.
///
/// `rows = floor(count / per_row) + 1`, height is
/// `margin_top + rows·h + (rows-1)·spacing_y` plus a bottom padding of
/// at least [`AUTO_HEIGHT_PADDING_PT`].
pub fn auto_page_height(spec: &GridSpec, count: usize) -> Result<f32> {
    let per_row = tiles_per_row(spec)?;
    let rows = count / per_row + 1;

    let padding = AUTO_HEIGHT_PADDING_PT.max(spec.margin_bottom);
    let height = spec.margin_top
        + rows as f32 * spec.tile_height
        + (rows - 1) as f32 * spec.spacing_y
        + padding;

    log::debug!(
        "auto height: {} tiles, {} per row, {} rows -> {:.2}pt",
        count,
        per_row,
        rows,
        height
    );

    Ok(height)
}

// =============================================================================
// Placement
// =============================================================================

/// Rows whose bottom edge stays above `limit`, counting one extra row of
/// float slack. The placement loop makes the exact decision.
fn rows_within(spec: &GridSpec, limit: f32) -> usize {
    let first_bottom = spec.margin_top + spec.tile_height;
    if first_bottom > limit {
        return 0;
    }

    let pitch = spec.tile_height + spec.spacing_y;
    if pitch <= 0.0 {
        return 1;
    }

    (((limit - first_bottom) / pitch).floor() as usize).saturating_add(2)
}

/// Place up to `count` tiles on a page of the given height.
///
/// Rects are returned in PDF space (origin bottom-left).
pub fn place_tiles(spec: &GridSpec, page_height: f32, count: usize) -> Result<TilePlan> {
    let per_row = tiles_per_row(spec)?;
    let limit = page_height - spec.margin_bottom + LAYOUT_EPSILON_PT;

    let capacity = per_row
        .saturating_mul(rows_within(spec, limit))
        .min(count);
    if capacity > MAX_TILE_PLACEMENTS {
        return Err(TileError::Config(format!(
            "{} tiles fit on the page, more than the {} a sheet can hold",
            capacity, MAX_TILE_PLACEMENTS
        )));
    }

    let mut placements = Vec::with_capacity(capacity);

    for index in 0..capacity {
        let row = index / per_row;
        let col = index % per_row;

        // Distance from the top edge of the page to the tile's top edge
        let top = spec.margin_top + row as f32 * (spec.tile_height + spec.spacing_y);
        if top + spec.tile_height > limit {
            break;
        }

        let x = spec.margin_left + col as f32 * (spec.tile_width + spec.spacing_x);
        let y = page_height - top - spec.tile_height;

        placements.push(TilePlacement {
            index,
            grid_pos: GridPosition::new(row, col),
            rect: Rect::new(x, y, spec.tile_width, spec.tile_height),
        });
    }

    if placements.len() < count {
        log::warn!(
            "Only {} of {} tiles fit on a {:.2}cm tall page",
            placements.len(),
            count,
            pt_to_cm(page_height)
        );
    }

    Ok(TilePlan {
        page_width_pt: spec.page_width,
        page_height_pt: page_height,
        tile_width_pt: spec.tile_width,
        tile_height_pt: spec.tile_height,
        tiles_per_row: per_row,
        requested: count,
        auto_height: false,
        placements,
    })
}

/// Compute the page height from the tile count, then place the tiles.
pub fn place_tiles_auto_height(spec: &GridSpec, count: usize) -> Result<TilePlan> {
    let height = auto_page_height(spec, count)?;
    if height > MAX_PAGE_DIMENSION_PT {
        return Err(TileError::Config(format!(
            "{} tiles need a {:.2}cm tall page, above the {:.2}cm PDF page limit",
            count,
            pt_to_cm(height),
            pt_to_cm(MAX_PAGE_DIMENSION_PT)
        )));
    }
    let mut plan = place_tiles(spec, height, count)?;
    plan.auto_height = true;
    Ok(plan)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::cm_to_pt;

    fn spec_cm(
        page_width: f32,
        margins: (f32, f32, f32),
        tile: (f32, f32),
        spacing: (f32, f32),
    ) -> GridSpec {
        GridSpec {
            page_width: cm_to_pt(page_width),
            margin_left: cm_to_pt(margins.0),
            margin_right: cm_to_pt(margins.1),
            margin_top: cm_to_pt(margins.2),
            margin_bottom: cm_to_pt(margins.2),
            tile_width: cm_to_pt(tile.0),
            tile_height: cm_to_pt(tile.1),
            spacing_x: cm_to_pt(spacing.0),
            spacing_y: cm_to_pt(spacing.1),
        }
    }

    #[test]
    fn test_tiles_per_row_reference_example() {
        // floor((58 - 0.2 + 1) / (10 + 1)) = floor(58.8 / 11) = 5
        let spec = spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        assert_eq!(tiles_per_row(&spec).unwrap(), 5);
    }

    #[test]
    fn test_tiles_per_row_exact_fit() {
        // 3 tiles of 10cm with 1cm spacing need exactly 32cm
        let spec = spec_cm(32.0, (0.0, 0.0, 0.0), (10.0, 10.0), (1.0, 1.0));
        assert_eq!(tiles_per_row(&spec).unwrap(), 3);
    }

    #[test]
    fn test_tiles_per_row_single_tile_without_spacing_room() {
        // Spacing is only needed between tiles, so one 10cm tile fits in 10cm
        let spec = spec_cm(10.2, (0.1, 0.1, 0.1), (10.0, 10.0), (5.0, 5.0));
        assert_eq!(tiles_per_row(&spec).unwrap(), 1);
    }

    #[test]
    fn test_tiles_per_row_rejects_narrow_page() {
        let spec = spec_cm(8.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        match tiles_per_row(&spec) {
            Err(TileError::NoTileFits { tile_cm, .. }) => assert!((tile_cm - 10.0).abs() < 1e-3),
            other => panic!("Expected NoTileFits, got {:?}", other),
        }
    }

    #[test]
    fn test_tiles_per_row_constant_over_page_heights() {
        let spec = spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        for height_cm in [20.0, 60.0, 200.0] {
            let plan = place_tiles(&spec, cm_to_pt(height_cm), 40).unwrap();
            assert_eq!(plan.tiles_per_row, 5);
        }
    }

    #[test]
    fn test_place_tiles_row_major_order() {
        let spec = spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        let page_height = cm_to_pt(60.0);
        let plan = place_tiles(&spec, page_height, 12).unwrap();

        assert_eq!(plan.placed(), 12);
        assert_eq!(plan.rows_used(), 3);
        assert!(!plan.is_truncated());

        let first = plan.placements[0];
        assert_eq!(first.grid_pos, GridPosition::new(0, 0));
        assert!((first.rect.x - cm_to_pt(0.1)).abs() < 1e-3);
        // Top edge sits at the top margin
        assert!((first.rect.top() - (page_height - cm_to_pt(0.1))).abs() < 1e-3);

        // Sixth tile wraps to the second row
        let sixth = plan.placements[5];
        assert_eq!(sixth.grid_pos, GridPosition::new(1, 0));
        assert!((first.rect.y - sixth.rect.y - cm_to_pt(11.0)).abs() < 1e-2);

        let fifth = plan.placements[4];
        assert!((fifth.rect.x - cm_to_pt(0.1 + 4.0 * 11.0)).abs() < 1e-2);
    }

    #[test]
    fn test_place_tiles_stops_at_bottom_margin() {
        let spec = spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        // Two full rows need 0.1 + 10 + 1 + 10 + 0.1 = 21.2cm
        let plan = place_tiles(&spec, cm_to_pt(21.2), 20).unwrap();
        assert_eq!(plan.placed(), 10);
        assert_eq!(plan.rows_used(), 2);
        assert!(plan.is_truncated());

        let plan = place_tiles(&spec, cm_to_pt(21.0), 20).unwrap();
        assert_eq!(plan.placed(), 5);
    }

    #[test]
    fn test_place_tiles_page_too_short_for_one_row() {
        let spec = spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        let plan = place_tiles(&spec, cm_to_pt(5.0), 3).unwrap();
        assert_eq!(plan.placed(), 0);
        assert_eq!(plan.rows_used(), 0);
    }

    #[test]
    fn test_place_zero_tiles() {
        let spec = spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        let plan = place_tiles(&spec, cm_to_pt(30.0), 0).unwrap();
        assert!(plan.placements.is_empty());
        assert!(!plan.is_truncated());
    }

    #[test]
    fn test_auto_height_formula() {
        let spec = spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        // 12 tiles, 5 per row -> rows = 12 / 5 + 1 = 3
        let height = auto_page_height(&spec, 12).unwrap();
        let expected = cm_to_pt(0.1) + 3.0 * cm_to_pt(10.0) + 2.0 * cm_to_pt(1.0) + 50.0;
        assert!((height - expected).abs() < 1e-2);

        // Exact multiple still gets the extra row
        let height = auto_page_height(&spec, 10).unwrap();
        let expected = cm_to_pt(0.1) + 3.0 * cm_to_pt(10.0) + 2.0 * cm_to_pt(1.0) + 50.0;
        assert!((height - expected).abs() < 1e-2);
    }

    #[test]
    fn test_auto_height_padding_grows_with_bottom_margin() {
        let mut spec = spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        spec.margin_bottom = cm_to_pt(3.0);
        let height = auto_page_height(&spec, 4).unwrap();
        let expected = cm_to_pt(0.1) + cm_to_pt(10.0) + cm_to_pt(3.0);
        assert!((height - expected).abs() < 1e-2);
    }

    #[test]
    fn test_auto_height_round_trip_places_all_tiles() {
        let layouts = [
            spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0)),
            spec_cm(30.0, (0.5, 0.3, 1.5), (4.2, 7.3), (0.0, 0.25)),
            spec_cm(21.0, (2.0, 2.0, 2.5), (3.0, 3.0), (0.5, 0.5)),
            spec_cm(12.0, (0.0, 0.0, 0.0), (12.0, 1.0), (0.0, 0.0)),
        ];

        for spec in layouts {
            for count in [0, 1, 4, 5, 6, 17, 50] {
                let height = auto_page_height(&spec, count).unwrap();
                let plan = place_tiles(&spec, height, count).unwrap();
                assert_eq!(plan.placed(), count, "spec {:?}, count {}", spec, count);
                for placement in &plan.placements {
                    assert!(placement.rect.y >= spec.margin_bottom - 1e-2);
                    assert!(placement.rect.top() <= height - spec.margin_top + 1e-2);
                }
            }
        }
    }

    #[test]
    fn test_huge_count_on_fixed_page_places_what_fits() {
        let spec = spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        let count = 1usize << 48;
        let plan = place_tiles(&spec, cm_to_pt(30.0), count).unwrap();

        assert_eq!(plan.placed(), 10);
        assert_eq!(plan.requested, count);
        assert!(plan.is_truncated());
        assert!(plan.placements.capacity() < 1000);
    }

    #[test]
    fn test_huge_count_with_auto_height_is_rejected() {
        let spec = spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        match place_tiles_auto_height(&spec, 1usize << 48) {
            Err(TileError::Config(message)) => assert!(message.contains("page limit")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_tiny_tiles_beyond_placement_limit_are_rejected() {
        let spec = spec_cm(58.0, (0.0, 0.0, 0.0), (0.01, 0.01), (0.0, 0.0));
        let result = place_tiles(&spec, cm_to_pt(500.0), usize::MAX);
        assert!(matches!(result, Err(TileError::Config(_))));
    }

    #[test]
    fn test_rows_within_matches_placement() {
        let spec = spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        for height_cm in [5.0, 10.2, 21.2, 21.0, 60.0] {
            let limit = cm_to_pt(height_cm) - spec.margin_bottom + LAYOUT_EPSILON_PT;
            let plan = place_tiles(&spec, cm_to_pt(height_cm), 1000).unwrap();
            assert!(plan.rows_used() <= rows_within(&spec, limit));
        }
    }

    #[test]
    fn test_place_tiles_auto_height_flag() {
        let spec = spec_cm(58.0, (0.1, 0.1, 0.1), (10.0, 10.0), (1.0, 1.0));
        let plan = place_tiles_auto_height(&spec, 7).unwrap();
        assert!(plan.auto_height);
        assert_eq!(plan.placed(), 7);
    }
}
