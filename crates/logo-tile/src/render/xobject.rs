//! XObject creation for tiling
//!
//! This module handles creating Form XObjects from the logo's host page,
//! which are then placed onto the output sheet with transformations.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::layout::Rect;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::{HashMap, HashSet};

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a source page.
///
/// The XObject can then be placed multiple times on the output page
/// with different transformations. Referenced objects are cached to avoid
/// duplicating the same object.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source document containing the page
/// * `page_id` - The object ID of the source page
/// * `bbox` - Visible region of the form, in source page space
/// * `cache` - Cache to avoid copying the same object multiple times
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    bbox: &Rect,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let content_data = get_page_content(source, page_id)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", rect_to_array(bbox));
    xobject_dict.set("FormType", Object::Integer(1));

    if let Some(resources) = inherited_attribute(source, page_id, b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, &resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

/// PDF rectangle array `[x0 y0 x1 y1]`
pub fn rect_to_array(rect: &Rect) -> Object {
    Object::Array(vec![
        Object::Real(rect.x),
        Object::Real(rect.y),
        Object::Real(rect.right()),
        Object::Real(rect.top()),
    ])
}

// =============================================================================
// Page Attributes
// =============================================================================

/// Look up a page attribute, following the `/Parent` chain for
/// inheritable keys such as `/MediaBox` and `/Resources`.
///
/// References are resolved, so the returned object is never a reference.
pub fn inherited_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut visited = HashSet::new();
    let mut node_id = page_id;

    while visited.insert(node_id) {
        let dict = doc.get_dictionary(node_id).ok()?;
        if let Ok(value) = dict.get(key) {
            return resolve(doc, value).cloned();
        }
        node_id = dict.get(b"Parent").and_then(|p| p.as_reference()).ok()?;
    }

    None
}

/// Follow a chain of references to the object it names
pub fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    let mut current = obj;
    let mut hops = 0;
    while let Object::Reference(id) = current {
        hops += 1;
        if hops > 32 {
            return None;
        }
        current = doc.get_object(*id).ok()?;
    }
    Some(current)
}

/// MediaBox of a page in points, defaulting to US Letter
pub fn page_media_box(doc: &Document, page_id: ObjectId) -> Rect {
    inherited_attribute(doc, page_id, b"MediaBox")
        .and_then(|obj| rect_from_array(doc, &obj))
        .unwrap_or_else(|| {
            Rect::new(0.0, 0.0, DEFAULT_PAGE_DIMENSIONS.0, DEFAULT_PAGE_DIMENSIONS.1)
        })
}

/// Get source page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &Document, page_id: ObjectId) -> (f32, f32) {
    let media_box = page_media_box(doc, page_id);
    (media_box.width, media_box.height)
}

fn rect_from_array(doc: &Document, obj: &Object) -> Option<Rect> {
    let arr = obj.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let mut values = [0.0f32; 4];
    for (slot, item) in values.iter_mut().zip(arr) {
        *slot = extract_number(resolve(doc, item)?)?;
    }
    let rect = Rect::from_corners(values[0], values[1], values[2], values[3]);
    (!rect.is_empty()).then_some(rect)
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the decoded content stream data from a page.
pub fn get_page_content(doc: &Document, page_id: ObjectId) -> Result<Vec<u8>> {
    let page_dict = doc.get_dictionary(page_id)?;
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match resolve(doc, contents) {
        Some(Object::Stream(stream)) => Ok(stream_bytes(stream)),
        Some(Object::Array(arr)) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Some(Object::Stream(stream)) = resolve(doc, obj) {
            result.extend_from_slice(&stream_bytes(stream));
            result.push(b'\n');
        }
    }

    Ok(result)
}

/// Decoded stream data, or the raw bytes when it carries no usable filter
pub(crate) fn stream_bytes(stream: &Stream) -> Vec<u8> {
    if !stream.dict.has(b"Filter") {
        return stream.content.clone();
    }
    match stream.decompressed_content() {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!(
                "Could not decompress stream ({}), using its {} raw bytes",
                e,
                stream.content.len()
            );
            stream.content.clone()
        }
    }
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache to avoid copying the same object multiple times.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the id first so self-referencing structures terminate
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

/// Extract numeric value from a PDF object
pub(crate) fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
