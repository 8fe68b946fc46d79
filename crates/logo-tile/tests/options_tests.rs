use logo_tile::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn test_default_options_are_valid() {
    let options = TileOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.page.width_cm, 58.0);
    assert!(options.page.is_auto_height());
    assert_eq!(options.page.effective_bottom_margin_cm(), 0.1);
    assert_eq!(options.sizing, TileSizing::HostPage);
}

#[test]
fn test_bottom_margin_defaults_to_top() {
    let mut page = PageSpec {
        top_margin_cm: 0.7,
        ..PageSpec::default()
    };
    assert_eq!(page.effective_bottom_margin_cm(), 0.7);

    page.bottom_margin_cm = Some(2.0);
    assert_eq!(page.effective_bottom_margin_cm(), 2.0);
}

#[test]
fn test_validation_rejects_bad_geometry() {
    let cases: [fn(&mut TileOptions); 10] = [
        |o| o.page.width_cm = 0.0,
        |o| o.page.width_cm = 600.0,
        |o| o.page.height_cm = Some(508.5),
        |o| o.page.height_cm = Some(-3.0),
        |o| o.page.left_margin_cm = -0.1,
        |o| o.page.bottom_margin_cm = Some(-1.0),
        |o| o.layout.spacing_y_cm = -1.0,
        |o| o.logo.width_cm = 0.0,
        |o| o.logo.height_cm = f32::NAN,
        |o| {
            o.page.left_margin_cm = 30.0;
            o.page.right_margin_cm = 28.0;
        },
    ];

    for (i, mutate) in cases.iter().enumerate() {
        let mut options = TileOptions::default();
        mutate(&mut options);
        match options.validate() {
            Err(TileError::Config(_)) => {}
            other => panic!("case {}: expected Config error, got {:?}", i, other),
        }
    }
}

#[test]
fn test_validation_allows_zero_spacing_and_margins() {
    let mut options = TileOptions::default();
    options.page.left_margin_cm = 0.0;
    options.page.right_margin_cm = 0.0;
    options.page.top_margin_cm = 0.0;
    options.layout.spacing_x_cm = 0.0;
    options.layout.spacing_y_cm = 0.0;
    assert!(options.validate().is_ok());
}

#[test]
fn test_locked_width_drives_height() {
    let mut logo = LogoSpec {
        width_cm: 4.0,
        height_cm: 2.0,
        aspect: AspectRatio::Locked(2.0),
        ..LogoSpec::default()
    };

    logo.set_width(10.0);
    assert!(approx(logo.height_cm, 5.0));

    logo.set_height(1.0);
    assert!(approx(logo.width_cm, 2.0));
}

#[test]
fn test_free_fields_are_independent() {
    let mut logo = LogoSpec {
        aspect: AspectRatio::Free,
        ..LogoSpec::default()
    };
    logo.set_width(3.0);
    logo.set_height(7.0);
    assert_eq!((logo.width_cm, logo.height_cm), (3.0, 7.0));
}

#[test]
fn test_toggle_lock_captures_current_ratio() {
    let mut logo = LogoSpec {
        width_cm: 6.0,
        height_cm: 3.0,
        aspect: AspectRatio::Free,
        ..LogoSpec::default()
    };

    logo.toggle_lock();
    assert_eq!(logo.aspect, AspectRatio::Locked(2.0));
    assert!(logo.is_locked());

    logo.toggle_lock();
    assert_eq!(logo.aspect, AspectRatio::Free);
}

#[test]
fn test_toggle_lock_falls_back_to_natural_ratio() {
    let mut logo = LogoSpec {
        width_cm: 6.0,
        height_cm: 0.0,
        aspect: AspectRatio::Free,
        natural_size_cm: Some((4.0, 1.0)),
        rotation: Rotation::None,
    };

    logo.toggle_lock();
    assert_eq!(logo.aspect, AspectRatio::Locked(4.0));
    assert!(approx(logo.height_cm, 1.5));
}

#[test]
fn test_apply_natural_size_locks_ratio() {
    let mut logo = LogoSpec::default();
    logo.apply_natural_size(8.0, 2.0);

    assert_eq!((logo.width_cm, logo.height_cm), (8.0, 2.0));
    assert_eq!(logo.aspect, AspectRatio::Locked(4.0));

    logo.set_width(4.0);
    assert!(approx(logo.height_cm, 1.0));
}

#[test]
fn test_rotate_twice_swaps_back() {
    let mut logo = LogoSpec::default();
    logo.apply_natural_size(8.0, 2.0);
    let original = logo;

    logo.rotate_cw();
    assert_eq!(logo.rotation, Rotation::Clockwise90);
    assert_eq!((logo.width_cm, logo.height_cm), (2.0, 8.0));
    assert_eq!(logo.natural_size_cm, Some((2.0, 8.0)));
    assert_eq!(logo.aspect, AspectRatio::Locked(0.25));

    logo.rotate_cw();
    assert_eq!((logo.width_cm, logo.height_cm), (8.0, 2.0));
    assert_eq!(logo.rotation, Rotation::Clockwise180);

    logo.rotate_cw();
    logo.rotate_cw();
    assert_eq!(logo, original);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let mut options = TileOptions::default();
    options.page.height_cm = Some(42.5);
    options.page.bottom_margin_cm = Some(1.0);
    options.logo.apply_natural_size(3.0, 1.5);
    options.logo.rotate_cw();
    options.layout.count = 33;
    options.layout.background_enabled = true;
    options.layout.background_color = HexColor::parse("#b9e7ba").unwrap();
    options.sizing = TileSizing::LogoBounds;

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Save
    options.save(path).await.unwrap();

    // Load
    let loaded = TileOptions::load(path).await.unwrap();
    assert_eq!(loaded, options);

    let json = std::fs::read_to_string(path).unwrap();
    assert!(json.contains("\"#b9e7ba\""));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_bad_colour() {
    use tempfile::NamedTempFile;

    let options = TileOptions::default();
    let temp_file = NamedTempFile::new().unwrap();
    options.save(temp_file.path()).await.unwrap();

    let json = std::fs::read_to_string(temp_file.path())
        .unwrap()
        .replace("#ffffff", "#zzzzzz");
    std::fs::write(temp_file.path(), json).unwrap();

    assert!(matches!(
        TileOptions::load(temp_file.path()).await,
        Err(TileError::Config(_))
    ));
}
