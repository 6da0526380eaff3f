//! Integration tests: every color input form lands on the same value.

use pretty_assertions::assert_eq;
use sc_core::{Color, ColorError};

#[test]
fn named_colors_match_hex_and_float_forms() {
    let cases = [
        ("red", "#FF0000", (1.0, 0.0, 0.0)),
        ("green", "#00FF00", (0.0, 1.0, 0.0)),
        ("blue", "#0000FF", (0.0, 0.0, 1.0)),
        ("black", "#000000", (0.0, 0.0, 0.0)),
        ("white", "#FFFFFF", (1.0, 1.0, 1.0)),
    ];
    for (name, hex, (r, g, b)) in cases {
        let by_name = Color::from_name(name).unwrap();
        assert_eq!(by_name, Color::from_hex(hex).unwrap(), "{name}");
        assert_eq!(by_name, Color::from_float(r, g, b).unwrap(), "{name}");
        assert_eq!(by_name.to_hex(), hex);
    }
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(
        Color::from_name("teal").unwrap_err().to_string(),
        "color 'teal' is not defined"
    );
    assert_eq!(
        Color::from_hex("#abc").unwrap_err(),
        ColorError::HexLength(3)
    );
    let out_of_range = Color::from_float(0.5, 1.5, 0.0).unwrap_err();
    assert!(out_of_range.to_string().contains("0-1"), "{out_of_range}");
}
