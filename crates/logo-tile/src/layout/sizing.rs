//! Resolution of user options into grid geometry

use crate::constants::cm_to_pt;
use crate::options::{LogoSpec, TileOptions};
use crate::types::{Result, TileSizing};

use super::{GridSpec, LogoMetrics, Rect, TilePlan, place_tiles, place_tiles_auto_height};

/// Tile rect size in points for the requested logo size.
///
/// With [`TileSizing::HostPage`] the whole host page is placed, so the rect
/// is inflated by the page-to-logo ratio and the logo itself lands at the
/// requested size.
pub fn tile_size_pt(logo: &LogoSpec, sizing: TileSizing, metrics: &LogoMetrics) -> (f32, f32) {
    match sizing {
        TileSizing::HostPage => {
            let (sx, sy) = metrics.host_scale();
            (cm_to_pt(logo.width_cm * sx), cm_to_pt(logo.height_cm * sy))
        }
        TileSizing::LogoBounds => (cm_to_pt(logo.width_cm), cm_to_pt(logo.height_cm)),
    }
}

/// Part of the host page that gets mapped onto each tile rect
pub fn source_rect(sizing: TileSizing, metrics: &LogoMetrics) -> Rect {
    match sizing {
        TileSizing::HostPage => metrics.page_box,
        TileSizing::LogoBounds => metrics.bounds,
    }
}

/// Build the point-space grid inputs for a set of options
pub fn grid_spec(options: &TileOptions, metrics: &LogoMetrics) -> GridSpec {
    let (tile_width, tile_height) = tile_size_pt(&options.logo, options.sizing, metrics);
    let page = &options.page;

    GridSpec {
        page_width: cm_to_pt(page.width_cm),
        margin_left: cm_to_pt(page.left_margin_cm),
        margin_right: cm_to_pt(page.right_margin_cm),
        margin_top: cm_to_pt(page.top_margin_cm),
        margin_bottom: cm_to_pt(page.effective_bottom_margin_cm()),
        tile_width,
        tile_height,
        spacing_x: cm_to_pt(options.layout.spacing_x_cm),
        spacing_y: cm_to_pt(options.layout.spacing_y_cm),
    }
}

/// Validate the options and lay out every tile
pub fn plan_tiles(options: &TileOptions, metrics: &LogoMetrics) -> Result<TilePlan> {
    options.validate()?;

    let spec = grid_spec(options, metrics);
    let count = options.layout.count;

    match options.page.height_cm {
        Some(height_cm) => place_tiles(&spec, cm_to_pt(height_cm), count),
        None => place_tiles_auto_height(&spec, count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::pt_to_cm;

    fn metrics() -> LogoMetrics {
        // 200 x 100pt page with a 100 x 50pt logo in the middle
        LogoMetrics::new(
            Rect::new(0.0, 0.0, 200.0, 100.0),
            Rect::new(50.0, 25.0, 100.0, 50.0),
        )
    }

    #[test]
    fn test_host_page_sizing_inflates_tile() {
        let logo = LogoSpec {
            width_cm: 4.0,
            height_cm: 2.0,
            ..LogoSpec::default()
        };
        let (w, h) = tile_size_pt(&logo, TileSizing::HostPage, &metrics());
        assert!((pt_to_cm(w) - 8.0).abs() < 1e-3);
        assert!((pt_to_cm(h) - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_logo_bounds_sizing_is_exact() {
        let logo = LogoSpec {
            width_cm: 4.0,
            height_cm: 2.0,
            ..LogoSpec::default()
        };
        let (w, h) = tile_size_pt(&logo, TileSizing::LogoBounds, &metrics());
        assert!((pt_to_cm(w) - 4.0).abs() < 1e-3);
        assert!((pt_to_cm(h) - 2.0).abs() < 1e-3);
        assert_eq!(
            source_rect(TileSizing::LogoBounds, &metrics()),
            metrics().bounds
        );
    }

    #[test]
    fn test_plan_tiles_uses_fixed_height() {
        let mut options = TileOptions::default();
        options.sizing = TileSizing::LogoBounds;
        options.page.height_cm = Some(21.2);
        options.layout.count = 20;

        let plan = plan_tiles(&options, &metrics()).unwrap();
        assert!(!plan.auto_height);
        assert_eq!(plan.tiles_per_row, 5);
        assert_eq!(plan.placed(), 10);
    }

    #[test]
    fn test_plan_tiles_rejects_invalid_options() {
        let mut options = TileOptions::default();
        options.logo.width_cm = 0.0;
        assert!(plan_tiles(&options, &metrics()).is_err());
    }
}
