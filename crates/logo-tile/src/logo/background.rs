//! Page background removal
//!
//! Vector logos exported from design tools usually carry a full-page
//! rectangle behind the artwork. Tiled on a coloured sheet that rectangle
//! would hide the background, so it is dropped before measuring.

use crate::constants::{FULL_PAGE_TOLERANCE_PT, WHITE_THRESHOLD};
use crate::layout::{Matrix, Rect};
use crate::render::page_media_box;
use crate::types::Result;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::content::*;

#[derive(Clone, Copy)]
struct GraphicsState {
    ctm: Matrix,
    fill_is_white: bool,
}

/// Remove background rectangles from the top-level content of a page.
///
/// A background is a single `re` painted with a fill-only operator, with
/// nothing else in its path, that covers the MediaBox or is filled white.
/// Returns how many were removed; the page is only rewritten when
/// something was. Content that cannot be parsed is left untouched.
pub fn strip_background(doc: &mut Document, page_id: ObjectId) -> Result<usize> {
    let Some(operations) = page_operations(doc, page_id)? else {
        log::warn!("Leaving page background in place");
        return Ok(0);
    };
    let media_box = page_media_box(doc, page_id);

    let remove = find_background_rects(&operations, &media_box);
    if remove.is_empty() {
        return Ok(0);
    }

    let kept: Vec<Operation> = operations
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !remove.contains(i) && !remove.contains(&i.wrapping_sub(1)))
        .map(|(_, op)| op)
        .collect();

    let content = Content { operations: kept }.encode()?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content));
    doc.get_dictionary_mut(page_id)?
        .set("Contents", Object::Reference(content_id));

    log::info!("Removed {} background rectangle(s)", remove.len());
    Ok(remove.len())
}

/// Indices of the `re` operators that draw a background.
///
/// The fill operator follows each index directly.
fn find_background_rects(operations: &[Operation], media_box: &Rect) -> Vec<usize> {
    let mut state = GraphicsState {
        ctm: Matrix::IDENTITY,
        fill_is_white: false,
    };
    let mut stack = Vec::new();
    let mut found = Vec::new();

    for (i, op) in operations.iter().enumerate() {
        match op.operator.as_str() {
            "q" => stack.push(state),
            "Q" => {
                if let Some(prev) = stack.pop() {
                    state = prev;
                }
            }
            "cm" => {
                if let Some(m) = op_matrix(op) {
                    state.ctm = m.then(&state.ctm);
                }
            }
            "g" => state.fill_is_white = op_f32(op, 0).is_some_and(|v| v >= WHITE_THRESHOLD),
            "rg" => {
                state.fill_is_white = op_numbers(op)
                    .is_some_and(|v| v.len() == 3 && v.iter().all(|c| *c >= WHITE_THRESHOLD))
            }
            "k" => {
                state.fill_is_white = op_numbers(op).is_some_and(|v| {
                    v.len() == 4 && v.iter().all(|c| *c <= 1.0 - WHITE_THRESHOLD)
                })
            }
            // Colour set through a colour space is not inspected
            "sc" | "scn" | "cs" => state.fill_is_white = false,
            "re" => {
                let starts_path = i == 0 || !is_path_construction(&operations[i - 1].operator);
                let fills = operations
                    .get(i + 1)
                    .is_some_and(|next| is_fill_only(&next.operator));
                if !(starts_path && fills) {
                    continue;
                }

                let Some(rect) = transformed_rect(op, &state.ctm) else {
                    continue;
                };
                if state.fill_is_white || rect.covers(media_box, FULL_PAGE_TOLERANCE_PT) {
                    found.push(i);
                }
            }
            _ => {}
        }
    }

    found
}

fn transformed_rect(op: &Operation, ctm: &Matrix) -> Option<Rect> {
    let v = op_numbers(op).filter(|v| v.len() == 4)?;
    let (x0, y0) = ctm.transform_point(v[0], v[1]);
    let (x1, y1) = ctm.transform_point(v[0] + v[2], v[1] + v[3]);
    Some(Rect::from_corners(x0, y0, x1, y1))
}
