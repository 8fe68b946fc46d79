//! Single-page output documents
//!
//! Both the tiled sheet and the rotated logo are one-page documents whose
//! content places Form XObjects with a `cm` transform.

use crate::layout::{Matrix, Rect};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::xobject::rect_to_array;

/// Write a page into `output` and make it the document's only page.
///
/// `output` must not already have a catalog. Returns the new page id.
pub fn add_single_page(
    output: &mut Document,
    media_box: &Rect,
    content: String,
    resources: Dictionary,
) -> Result<ObjectId> {
    let pages_tree_id = output.new_object_id();

    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_tree_id));
    page_dict.set("MediaBox", rect_to_array(media_box));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));
    let page_id = output.add_object(page_dict);

    // Create pages tree
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
        ("Count", Object::Integer(1)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(page_id)
}

/// Resources dictionary naming a single Form XObject
pub fn xobject_resources(name: &str, xobject_id: ObjectId) -> Dictionary {
    let mut xobjects = Dictionary::new();
    xobjects.set(name.as_bytes(), Object::Reference(xobject_id));

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));
    resources
}

/// Generate the PDF content stream command to place an XObject.
pub fn placement_command(xobject_name: &str, matrix: &Matrix) -> String {
    format!("q {} cm /{} Do Q\n", matrix.to_operands(), xobject_name)
}
