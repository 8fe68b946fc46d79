use logo_tile::*;

#[test]
fn test_rotation_cycle() {
    let mut rotation = Rotation::default();
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(rotation.degrees());
        rotation = rotation.next_clockwise();
    }
    assert_eq!(seen, vec![0, 90, 180, 270]);
    assert_eq!(rotation, Rotation::None);
}

#[test]
fn test_rotation_turns_to() {
    assert_eq!(Rotation::None.turns_to(Rotation::Clockwise270), 3);
    assert_eq!(Rotation::Clockwise270.turns_to(Rotation::None), 1);
    assert_eq!(Rotation::Clockwise90.turns_to(Rotation::Clockwise90), 0);
    assert_eq!(Rotation::from_quarter_turns(6), Rotation::Clockwise180);
}

#[test]
fn test_rotation_swaps_axes() {
    assert!(!Rotation::None.swaps_axes());
    assert!(Rotation::Clockwise90.swaps_axes());
    assert!(!Rotation::Clockwise180.swaps_axes());
    assert!(Rotation::Clockwise270.swaps_axes());
}

#[test]
fn test_no_tile_fits_message() {
    let err = TileError::NoTileFits {
        available_cm: 4.8,
        tile_cm: 10.0,
    };
    assert_eq!(
        err.to_string(),
        "No tile fits across the page: 4.80cm available, tile is 10.00cm"
    );
}

#[test]
fn test_hex_color_round_trip_through_string() {
    let color: HexColor = "#B9E7BA".parse().unwrap();
    let text: String = color.into();
    assert_eq!(text, "#b9e7ba");
    assert!(matches!(
        HexColor::try_from("blue".to_string()),
        Err(TileError::InvalidColor(_))
    ));
}
