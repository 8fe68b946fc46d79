mod common;

use common::*;
use logo_tile::constants::{cm_to_pt, pt_to_cm};
use logo_tile::*;
use lopdf::Object;
use tempfile::NamedTempFile;

fn standard_logo() -> Logo {
    Logo::from_document(standard_logo_pdf()).unwrap()
}

fn count_forms(doc: &lopdf::Document) -> usize {
    doc.objects
        .values()
        .filter_map(|obj| obj.as_stream().ok())
        .filter(|s| {
            s.dict
                .get(b"Subtype")
                .and_then(|t| t.as_name())
                .map(|n| n == b"Form")
                .unwrap_or(false)
        })
        .count()
}

fn media_box(doc: &lopdf::Document) -> Vec<f32> {
    let page_id = *doc.get_pages().values().next().unwrap();
    doc.get_dictionary(page_id)
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|o| match o {
            Object::Real(r) => *r,
            Object::Integer(i) => *i as f32,
            _ => panic!("non-numeric MediaBox"),
        })
        .collect()
}

#[test]
fn test_compose_fixed_height_sheet() {
    let mut options = TileOptions::default();
    options.sizing = TileSizing::LogoBounds;
    options.page.height_cm = Some(30.0);
    options.layout.count = 7;

    let sheet = compose_sheet(&standard_logo(), &options).unwrap();

    assert_eq!(sheet.document.get_pages().len(), 1);
    assert_eq!(sheet.plan.tiles_per_row, 5);
    assert_eq!(sheet.plan.placed(), 7);
    assert_eq!(sheet.statistics.rows, 2);

    let content = first_page_content(&sheet.document);
    assert_eq!(content.matches("/Logo Do").count(), 7);

    let mb = media_box(&sheet.document);
    assert!(approx(mb[2], cm_to_pt(58.0), 1e-2));
    assert!(approx(mb[3], cm_to_pt(30.0), 1e-2));
}

#[test]
fn test_all_placements_share_one_form() {
    let options = TileOptions::default();
    let sheet = compose_sheet(&standard_logo(), &options).unwrap();

    assert_eq!(sheet.plan.placed(), 10);
    assert_eq!(count_forms(&sheet.document), 1);
}

#[test]
fn test_host_page_sizing_inflates_tiles() {
    // Logo bounds are half the page on each axis, so a 10cm logo needs a 20cm tile
    let options = TileOptions::default();
    let sheet = compose_sheet(&standard_logo(), &options).unwrap();

    assert!(approx(sheet.statistics.tile_width_cm, 20.0, 1e-3));
    assert!(approx(sheet.statistics.tile_height_cm, 20.0, 1e-3));
    // floor((58 - 0.2 + 1) / 21) = 2
    assert_eq!(sheet.statistics.tiles_per_row, 2);
}

#[test]
fn test_background_is_painted_first() {
    let mut options = TileOptions::default();
    options.layout.background_enabled = true;
    options.layout.background_color = HexColor::parse("#ff0000").unwrap();

    let sheet = compose_sheet(&standard_logo(), &options).unwrap();
    let content = first_page_content(&sheet.document);

    assert!(content.starts_with("q 1 0 0 rg 0 0 "));
    let fill = content.find(" re f").unwrap();
    let first_tile = content.find("/Logo Do").unwrap();
    assert!(fill < first_tile);
}

#[test]
fn test_background_disabled_paints_nothing_extra() {
    let mut options = TileOptions::default();
    options.layout.background_color = HexColor::parse("#00ff00").unwrap();

    let sheet = compose_sheet(&standard_logo(), &options).unwrap();
    let content = first_page_content(&sheet.document);
    assert!(!content.contains(" rg "));
}

#[test]
fn test_no_tile_fits() {
    let mut options = TileOptions::default();
    options.page.width_cm = 5.0;

    match compose_sheet(&standard_logo(), &options) {
        Err(TileError::NoTileFits { .. }) => {}
        other => panic!("Expected NoTileFits, got {:?}", other.map(|s| s.plan)),
    }
}

#[test]
fn test_zero_tiles_gives_empty_sheet() {
    let mut options = TileOptions::default();
    options.layout.count = 0;

    let sheet = compose_sheet(&standard_logo(), &options).unwrap();
    assert_eq!(sheet.plan.placed(), 0);
    assert_eq!(count_forms(&sheet.document), 0);
    assert!(!first_page_content(&sheet.document).contains("Do"));
}

#[test]
fn test_requested_rotation_is_applied() {
    let mut options = TileOptions::default();
    options.sizing = TileSizing::LogoBounds;
    options.logo.rotation = Rotation::Clockwise90;

    let upright = standard_logo();
    let sheet = compose_sheet(&upright, &options).unwrap();

    // The placed form is the rotated page, which wraps the original
    assert_eq!(count_forms(&sheet.document), 2);
    assert_eq!(sheet.plan.placed(), 10);
}

#[test]
fn test_auto_height_sheet_refits_at_fixed_height() {
    let mut options = TileOptions::default();
    options.sizing = TileSizing::LogoBounds;
    options.layout.count = 23;

    let auto = compose_sheet(&standard_logo(), &options).unwrap();
    assert!(auto.statistics.auto_height);
    assert_eq!(auto.plan.placed(), 23);

    options.page.height_cm = Some(pt_to_cm(auto.plan.page_height_pt));
    let fixed = compose_sheet(&standard_logo(), &options).unwrap();
    assert!(!fixed.statistics.auto_height);
    assert_eq!(fixed.plan.placed(), 23);
}

#[tokio::test]
async fn test_tile_to_file() {
    let temp = NamedTempFile::new().unwrap();
    let options = TileOptions::default();

    let stats = tile_to_file(&standard_logo(), &options, temp.path())
        .await
        .unwrap();
    assert_eq!(stats.placed_tiles, 10);

    let loaded = load_pdf(temp.path()).await.unwrap();
    assert_eq!(loaded.get_pages().len(), 1);
    assert_eq!(first_page_content(&loaded).matches("/Logo Do").count(), 10);
}

#[tokio::test]
async fn test_tile_rejects_invalid_options() {
    let mut options = TileOptions::default();
    options.layout.spacing_x_cm = -1.0;

    let result = tile(&standard_logo(), &options).await;
    assert!(matches!(result, Err(TileError::Config(_))));
}
