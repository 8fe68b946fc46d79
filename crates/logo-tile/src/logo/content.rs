//! Content stream helpers shared by the logo passes

use crate::layout::Matrix;
use crate::render::{extract_number, get_page_content, inherited_attribute, resolve};
use crate::types::Result;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Decoded top-level operations of a page
///
/// `None` when the content stream cannot be parsed.
pub(crate) fn page_operations(
    doc: &Document,
    page_id: ObjectId,
) -> Result<Option<Vec<Operation>>> {
    let bytes = get_page_content(doc, page_id)?;
    if bytes.is_empty() {
        return Ok(Some(Vec::new()));
    }
    Ok(decode_operations(&bytes))
}

/// Parse a content stream, logging instead of failing on malformed input
pub(crate) fn decode_operations(bytes: &[u8]) -> Option<Vec<Operation>> {
    match Content::decode(bytes) {
        Ok(content) => Some(content.operations),
        Err(e) => {
            log::warn!("Could not parse content stream ({} bytes): {}", bytes.len(), e);
            None
        }
    }
}

/// The page's resources dictionary, resolved through inheritance
pub(crate) fn page_resources(doc: &Document, page_id: ObjectId) -> Option<Dictionary> {
    match inherited_attribute(doc, page_id, b"Resources")? {
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

/// Resolve an object to a dictionary, cloning it out of the document
pub(crate) fn resolve_dict(doc: &Document, obj: &Object) -> Option<Dictionary> {
    match resolve(doc, obj)? {
        Object::Dictionary(dict) => Some(dict.clone()),
        _ => None,
    }
}

pub(crate) fn op_f32(op: &Operation, idx: usize) -> Option<f32> {
    extract_number(op.operands.get(idx)?)
}

/// All operands as numbers, or `None` if any is not numeric
pub(crate) fn op_numbers(op: &Operation) -> Option<Vec<f32>> {
    op.operands.iter().map(extract_number).collect()
}

pub(crate) fn op_name(op: &Operation, idx: usize) -> Option<&[u8]> {
    op.operands.get(idx)?.as_name().ok()
}

pub(crate) fn op_matrix(op: &Operation) -> Option<Matrix> {
    let values = op_numbers(op)?;
    let array: [f32; 6] = values.as_slice().try_into().ok()?;
    Some(Matrix::from_array(array))
}

/// `/Matrix` entry of a form dictionary, identity when absent
pub(crate) fn form_matrix(doc: &Document, dict: &Dictionary) -> Matrix {
    let Some(Object::Array(arr)) = dict.get(b"Matrix").ok().and_then(|m| resolve(doc, m)) else {
        return Matrix::IDENTITY;
    };
    let values: Option<Vec<f32>> = arr.iter().map(extract_number).collect();
    values
        .and_then(|v| <[f32; 6]>::try_from(v.as_slice()).ok())
        .map(Matrix::from_array)
        .unwrap_or(Matrix::IDENTITY)
}

/// Path construction operators
pub(crate) fn is_path_construction(operator: &str) -> bool {
    matches!(operator, "m" | "l" | "c" | "v" | "y" | "h" | "re")
}

/// Operators that paint the current path
pub(crate) fn is_path_painting(operator: &str) -> bool {
    matches!(
        operator,
        "S" | "s" | "f" | "F" | "f*" | "B" | "B*" | "b" | "b*"
    )
}

/// Operators that fill without stroking
pub(crate) fn is_fill_only(operator: &str) -> bool {
    matches!(operator, "f" | "F" | "f*")
}
