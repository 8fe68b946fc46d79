use crate::constants::pt_to_cm;
use crate::layout::{LogoMetrics, TilePlan, plan_tiles};
use crate::options::TileOptions;
use crate::types::*;

/// Calculate statistics for a tiling run without rendering it
pub fn calculate_statistics(
    metrics: &LogoMetrics,
    options: &TileOptions,
) -> Result<TilingStatistics> {
    let plan = plan_tiles(options, metrics)?;
    Ok(statistics_from_plan(&plan))
}

pub(crate) fn statistics_from_plan(plan: &TilePlan) -> TilingStatistics {
    TilingStatistics {
        requested_tiles: plan.requested,
        placed_tiles: plan.placed(),
        tiles_per_row: plan.tiles_per_row,
        rows: plan.rows_used(),
        tile_width_cm: pt_to_cm(plan.tile_width_pt),
        tile_height_cm: pt_to_cm(plan.tile_height_pt),
        page_width_cm: pt_to_cm(plan.page_width_pt),
        page_height_cm: pt_to_cm(plan.page_height_pt),
        auto_height: plan.auto_height,
    }
}
