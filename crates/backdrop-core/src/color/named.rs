//! The closed table of named colors.

use super::Rgb;

/// Every name the parser recognizes. `grey` and `gray` are synonyms.
const NAMED_COLORS: [(&str, Rgb); 7] = [
    ("white", Rgb::new(255.0, 255.0, 255.0)),
    ("black", Rgb::new(0.0, 0.0, 0.0)),
    ("red", Rgb::new(255.0, 0.0, 0.0)),
    ("green", Rgb::new(0.0, 128.0, 0.0)),
    ("blue", Rgb::new(0.0, 0.0, 255.0)),
    ("grey", Rgb::new(128.0, 128.0, 128.0)),
    ("gray", Rgb::new(128.0, 128.0, 128.0)),
];

/// Case-insensitive lookup. The whole string must match; surrounding
/// whitespace is not trimmed.
pub fn lookup_named(name: &str) -> Option<Rgb> {
    let lower = name.to_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(key, _)| *key == lower)
        .map(|(_, rgb)| *rgb)
}
