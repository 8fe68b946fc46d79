//! Painted-content bounding box of a page
//!
//! Paths, image XObjects and inline images are transformed by the current
//! transformation matrix and unioned. Form XObjects are entered with their
//! own `/Matrix` and resources. Text is not measured.

use crate::constants::MAX_FORM_DEPTH;
use crate::layout::{Bounds, Matrix, Rect};
use crate::types::Result;
use lopdf::content::Operation;
use lopdf::{Dictionary, Document, ObjectId};
use std::collections::HashSet;

use super::content::*;
use crate::render::stream_bytes;

/// Bounding box of everything painted on a page, in page space.
///
/// Returns `None` when the page paints nothing measurable or its content
/// cannot be parsed.
pub fn content_bounds(doc: &Document, page_id: ObjectId) -> Result<Option<Rect>> {
    let Some(operations) = page_operations(doc, page_id)? else {
        return Ok(None);
    };
    let resources = page_resources(doc, page_id);

    let mut walker = BoundsWalker {
        doc,
        active_forms: HashSet::new(),
        painted: Bounds::new(),
    };
    walker.walk(&operations, resources.as_ref(), Matrix::IDENTITY, 0)?;

    Ok(walker.painted.to_rect())
}

struct BoundsWalker<'a> {
    doc: &'a Document,
    /// Forms on the current recursion path
    active_forms: HashSet<ObjectId>,
    painted: Bounds,
}

impl BoundsWalker<'_> {
    fn walk(
        &mut self,
        operations: &[Operation],
        resources: Option<&Dictionary>,
        initial_ctm: Matrix,
        depth: usize,
    ) -> Result<()> {
        let mut ctm = initial_ctm;
        let mut stack: Vec<Matrix> = Vec::new();
        let mut path = Bounds::new();

        for op in operations {
            match op.operator.as_str() {
                "q" => stack.push(ctm),
                "Q" => {
                    if let Some(prev) = stack.pop() {
                        ctm = prev;
                    }
                }
                "cm" => {
                    if let Some(m) = op_matrix(op) {
                        ctm = m.then(&ctm);
                    }
                }
                "m" | "l" | "c" | "v" | "y" => {
                    // Control points keep the box conservative for curves
                    if let Some(values) = op_numbers(op) {
                        for pair in values.chunks_exact(2) {
                            let (x, y) = ctm.transform_point(pair[0], pair[1]);
                            path.add_point(x, y);
                        }
                    }
                }
                "re" => {
                    if let Some(values) = op_numbers(op).filter(|v| v.len() == 4) {
                        let (x, y, w, h) = (values[0], values[1], values[2], values[3]);
                        add_rect(&mut path, &ctm, &Rect::from_corners(x, y, x + w, y + h));
                    }
                }
                "n" => path.clear(),
                operator if is_path_painting(operator) => {
                    self.painted.union(&path);
                    path.clear();
                }
                "BI" | "EI" => {
                    // Inline images occupy the unit square
                    add_rect(&mut self.painted, &ctm, &Rect::new(0.0, 0.0, 1.0, 1.0));
                }
                "Do" => {
                    if let Some(name) = op_name(op, 0) {
                        self.paint_xobject(name, resources, &ctm, depth)?;
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn paint_xobject(
        &mut self,
        name: &[u8],
        resources: Option<&Dictionary>,
        ctm: &Matrix,
        depth: usize,
    ) -> Result<()> {
        let doc = self.doc;
        let Some(xobject_id) = resources
            .and_then(|r| r.get(b"XObject").ok())
            .and_then(|x| resolve_dict(doc, x))
            .and_then(|x| x.get(name).ok().and_then(|o| o.as_reference().ok()))
        else {
            log::debug!("XObject /{} not found", String::from_utf8_lossy(name));
            return Ok(());
        };

        let Ok(stream) = doc.get_object(xobject_id).and_then(|o| o.as_stream()) else {
            return Ok(());
        };

        let subtype = stream
            .dict
            .get(b"Subtype")
            .and_then(|s| s.as_name())
            .unwrap_or_default();

        match subtype {
            b"Image" => add_rect(&mut self.painted, ctm, &Rect::new(0.0, 0.0, 1.0, 1.0)),
            b"Form" => {
                if depth >= MAX_FORM_DEPTH || !self.active_forms.insert(xobject_id) {
                    log::warn!("Skipping recursive or deeply nested form XObject {:?}", xobject_id);
                    return Ok(());
                }

                let form_resources = stream
                    .dict
                    .get(b"Resources")
                    .ok()
                    .and_then(|r| resolve_dict(doc, r));
                let form_ctm = form_matrix(doc, &stream.dict).then(ctm);
                let bytes = stream_bytes(stream);
                let Some(operations) = decode_operations(&bytes) else {
                    log::warn!("Skipping unreadable form XObject {:?}", xobject_id);
                    self.active_forms.remove(&xobject_id);
                    return Ok(());
                };

                self.walk(
                    &operations,
                    form_resources.as_ref().or(resources),
                    form_ctm,
                    depth + 1,
                )?;
                self.active_forms.remove(&xobject_id);
            }
            _ => {}
        }

        Ok(())
    }
}

fn add_rect(bounds: &mut Bounds, ctm: &Matrix, rect: &Rect) {
    for (x, y) in [
        (rect.x, rect.y),
        (rect.right(), rect.y),
        (rect.x, rect.top()),
        (rect.right(), rect.top()),
    ] {
        let (tx, ty) = ctm.transform_point(x, y);
        bounds.add_point(tx, ty);
    }
}
