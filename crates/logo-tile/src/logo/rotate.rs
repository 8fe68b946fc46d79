//! Quarter-turn rotation of a logo page

use crate::constants::LOGO_XOBJECT_NAME;
use crate::layout::{Matrix, Rect};
use crate::render::{
    add_single_page, create_page_xobject, page_media_box, placement_command, xobject_resources,
};
use crate::types::Result;
use lopdf::{Document, ObjectId};
use std::collections::HashMap;

/// Build a one-page document showing `page_id` turned 90° clockwise.
///
/// The new page is `height × width` of the source MediaBox and draws the
/// source page as a Form XObject. Returns the document and its page id.
pub fn rotate_page_cw(source: &Document, page_id: ObjectId) -> Result<(Document, ObjectId)> {
    let media_box = page_media_box(source, page_id);

    let mut output = Document::with_version("1.7");
    let mut cache = HashMap::new();
    let xobject_id = create_page_xobject(&mut output, source, page_id, &media_box, &mut cache)?;

    let matrix = Matrix::quarter_turn_cw(&media_box);
    let rotated = Rect::new(0.0, 0.0, media_box.height, media_box.width);
    let new_page = add_single_page(
        &mut output,
        &rotated,
        placement_command(LOGO_XOBJECT_NAME, &matrix),
        xobject_resources(LOGO_XOBJECT_NAME, xobject_id),
    )?;

    log::debug!(
        "rotated {:.1}x{:.1}pt page clockwise",
        media_box.width,
        media_box.height
    );

    Ok((output, new_page))
}

/// Apply `turns` clockwise quarter turns, returning the source unchanged for zero
pub fn rotate_page_cw_times(
    source: Document,
    page_id: ObjectId,
    turns: usize,
) -> Result<(Document, ObjectId)> {
    let mut current = (source, page_id);
    for _ in 0..turns % 4 {
        current = rotate_page_cw(&current.0, current.1)?;
    }
    Ok(current)
}
