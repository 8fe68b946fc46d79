#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// One-page document with the given MediaBox size, content and resources
pub fn create_logo_pdf(width: i64, height: i64, content: &str, resources: Dictionary) -> Document {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.as_bytes().to_vec()));

    let page_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(width),
                Object::Integer(height),
            ]),
        ),
        ("Resources", Object::Dictionary(resources)),
        ("Contents", Object::Reference(content_id)),
    ]));

    finish_document(&mut doc, pages_id, vec![Object::Reference(page_id)]);
    doc
}

/// A 200 x 100pt logo: white full-page background under a blue 100 x 50 box
pub fn standard_logo_pdf() -> Document {
    create_logo_pdf(
        200,
        100,
        "1 1 1 rg 0 0 200 100 re f 0 0 1 rg 50 25 100 50 re f",
        Dictionary::new(),
    )
}

/// Document with a page tree but no pages
pub fn empty_pdf() -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    finish_document(&mut doc, pages_id, Vec::new());
    doc
}

/// Add a Form XObject with the given content, matrix and resources
pub fn add_form(
    doc: &mut Document,
    content: &str,
    bbox: [i64; 4],
    matrix: Option<[i64; 6]>,
    resources: Option<Dictionary>,
) -> ObjectId {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Form".to_vec()));
    dict.set(
        "BBox",
        Object::Array(bbox.iter().map(|v| Object::Integer(*v)).collect()),
    );
    if let Some(m) = matrix {
        dict.set(
            "Matrix",
            Object::Array(m.iter().map(|v| Object::Integer(*v)).collect()),
        );
    }
    if let Some(resources) = resources {
        dict.set("Resources", Object::Dictionary(resources));
    }
    doc.add_object(Stream::new(dict, content.as_bytes().to_vec()))
}

/// Resources dictionary with one XObject entry
pub fn xobject_resources(name: &str, id: ObjectId) -> Dictionary {
    let mut xobjects = Dictionary::new();
    xobjects.set(name.as_bytes(), Object::Reference(id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));
    resources
}

/// Decoded content of the first page
pub fn first_page_content(doc: &Document) -> String {
    let page_id = *doc.get_pages().values().next().unwrap();
    String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).into_owned()
}

pub fn save_to_bytes(doc: &mut Document) -> Vec<u8> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    writer
}

pub fn approx(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

fn finish_document(doc: &mut Document, pages_id: ObjectId, kids: Vec<Object>) {
    let count = kids.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(count)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);
}
