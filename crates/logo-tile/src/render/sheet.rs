//! Tiled sheet rendering

use crate::color::HexColor;
use crate::constants::LOGO_XOBJECT_NAME;
use crate::layout::{Matrix, Rect, TilePlan};
use crate::types::Result;
use lopdf::{Dictionary, Document, ObjectId};
use std::collections::HashMap;

use super::page::{add_single_page, placement_command, xobject_resources};
use super::xobject::create_page_xobject;

/// Render the tiled sheet into `output` as its only page.
///
/// The logo page is copied once as a Form XObject clipped to `source`,
/// and every placement maps `source` onto its tile rect.
///
/// # Arguments
/// * `output` - Empty output document
/// * `logo` - Document holding the logo page
/// * `logo_page` - Object ID of the logo page
/// * `source` - Region of the logo page placed in each tile
/// * `plan` - Page size and tile rects
/// * `background` - Opaque fill painted under the tiles
pub fn render_tile_sheet(
    output: &mut Document,
    logo: &Document,
    logo_page: ObjectId,
    source: &Rect,
    plan: &TilePlan,
    background: Option<HexColor>,
) -> Result<ObjectId> {
    let page_rect = Rect::new(0.0, 0.0, plan.page_width_pt, plan.page_height_pt);
    let mut content = String::new();

    if let Some(color) = background {
        content.push_str(&background_command(color, &page_rect));
    }

    let resources = if plan.placements.is_empty() {
        Dictionary::new()
    } else {
        let mut cache = HashMap::new();
        let xobject_id = create_page_xobject(output, logo, logo_page, source, &mut cache)?;

        for placement in &plan.placements {
            let matrix = Matrix::rect_to_rect(source, &placement.rect);
            content.push_str(&placement_command(LOGO_XOBJECT_NAME, &matrix));
        }

        xobject_resources(LOGO_XOBJECT_NAME, xobject_id)
    };

    log::debug!(
        "rendered sheet {:.1}x{:.1}pt with {} placements",
        plan.page_width_pt,
        plan.page_height_pt,
        plan.placed()
    );

    add_single_page(output, &page_rect, content, resources)
}

/// Fill `rect` with an opaque RGB colour
fn background_command(color: HexColor, rect: &Rect) -> String {
    let (r, g, b) = color.to_rgb_f32();
    format!(
        "q {} {} {} rg {} {} {} {} re f Q\n",
        r, g, b, rect.x, rect.y, rect.width, rect.height
    )
}
