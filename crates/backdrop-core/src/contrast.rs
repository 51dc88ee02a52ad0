//! Button palette derivation for an arbitrary background.
//!
//! Given a background color spec, picks a button background that is a
//! visible shade of it and a text color (black or white) that reads on it.
//!
//! The light/dark split uses the plain luma weighting
//!
//! ```text
//! L = 0.299·R + 0.587·G + 0.114·B      (channels on 0–255)
//! ```
//!
//! with no gamma correction, and a strict `L > 128` threshold for "light".

use serde::{Deserialize, Serialize};

use crate::color::{Rgb, parse_color};

/// Luma weights, BT.601.
const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Luma strictly above this is a light background.
const LIGHT_THRESHOLD: f64 = 128.0;

/// Light backgrounds get a button this fraction of their own brightness.
const DARKEN_FACTOR: f64 = 0.8;

/// Dark backgrounds get a button this much brighter per channel.
const LIGHTEN_OFFSET: f64 = 50.0;

/// Alpha of every derived button background.
const BUTTON_ALPHA: f64 = 0.7;

pub const TEXT_ON_LIGHT: &str = "#000000";
pub const TEXT_ON_DARK: &str = "#ffffff";

/// Whether a background reads as light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    pub fn of(rgb: Rgb) -> Self {
        if luma(rgb) > LIGHT_THRESHOLD {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

/// Button colors derived from a background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedColors {
    /// `rgba(R, G, B, 0.7)`.
    pub button_background: String,
    /// `#000000` or `#ffffff`.
    pub button_text: String,
}

impl DerivedColors {
    /// Pair used when no background is given at all. Matches what a white
    /// background derives to.
    pub fn fallback() -> Self {
        Self {
            button_background: format!("rgba(204, 204, 204, {BUTTON_ALPHA})"),
            button_text: TEXT_ON_LIGHT.to_owned(),
        }
    }

    /// Derive the pair for an already-parsed background.
    pub fn for_rgb(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.channels();
        match Shade::of(rgb) {
            // Fractional results are kept, e.g. 224 → 179.20000000000002.
            Shade::Light => Self {
                button_background: format!(
                    "rgba({}, {}, {}, {BUTTON_ALPHA})",
                    r * DARKEN_FACTOR,
                    g * DARKEN_FACTOR,
                    b * DARKEN_FACTOR,
                ),
                button_text: TEXT_ON_LIGHT.to_owned(),
            },
            Shade::Dark => {
                let lift = |c: f64| (c + LIGHTEN_OFFSET).min(255.0);
                Self {
                    button_background: format!(
                        "rgba({}, {}, {}, {BUTTON_ALPHA})",
                        lift(r),
                        lift(g),
                        lift(b),
                    ),
                    button_text: TEXT_ON_DARK.to_owned(),
                }
            }
        }
    }
}

impl Default for DerivedColors {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Perceptual luma on the 0–255 scale.
///
/// Evaluated left to right in `f64`, so mid grey (128, 128, 128) lands at
/// 127.99999999999999 rather than exactly 128.
pub fn luma(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.channels();
    LUMA_WEIGHTS[0] * r + LUMA_WEIGHTS[1] * g + LUMA_WEIGHTS[2] * b
}

/// Derive the button palette for a background color spec.
///
/// Never fails. `None` or an empty spec yields [`DerivedColors::fallback`];
/// an unparseable spec is treated as white.
pub fn compute_contrast(background: Option<&str>) -> DerivedColors {
    match background {
        Some(spec) if !spec.is_empty() => DerivedColors::for_rgb(parse_color(spec)),
        _ => DerivedColors::fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derived(bg: &str, text: &str) -> DerivedColors {
        DerivedColors {
            button_background: bg.to_owned(),
            button_text: text.to_owned(),
        }
    }

    #[test]
    fn test_absent_or_empty_uses_fallback() {
        let expected = derived("rgba(204, 204, 204, 0.7)", "#000000");
        assert_eq!(compute_contrast(None), expected);
        assert_eq!(compute_contrast(Some("")), expected);
    }

    #[test]
    fn test_white_is_light() {
        assert_eq!(
            compute_contrast(Some("#ffffff")),
            derived("rgba(204, 204, 204, 0.7)", "#000000")
        );
    }

    #[test]
    fn test_black_is_dark() {
        assert_eq!(
            compute_contrast(Some("#000000")),
            derived("rgba(50, 50, 50, 0.7)", "#ffffff")
        );
    }

    #[test]
    fn test_red_functional_clamps_lifted_channel() {
        assert_eq!(
            compute_contrast(Some("rgb(255, 0, 0)")),
            derived("rgba(255, 50, 50, 0.7)", "#ffffff")
        );
    }

    #[test]
    fn test_named_blue() {
        assert_eq!(
            compute_contrast(Some("blue")),
            derived("rgba(50, 50, 255, 0.7)", "#ffffff")
        );
    }

    #[test]
    fn test_unknown_name_treated_as_white() {
        assert_eq!(compute_contrast(Some("purple")), compute_contrast(Some("#ffffff")));
    }

    #[test]
    fn test_shorthand_matches_long_form() {
        assert_eq!(compute_contrast(Some("#000")), compute_contrast(Some("#000000")));
        assert_eq!(compute_contrast(Some("#abc")), compute_contrast(Some("#aabbcc")));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        for spec in ["#e0e0e0", "rgb(12, 200, 7)", "grey", "nonsense", ""] {
            assert_eq!(compute_contrast(Some(spec)), compute_contrast(Some(spec)));
        }
    }

    #[test]
    fn test_mid_grey_is_dark() {
        assert!(luma(Rgb::new(128.0, 128.0, 128.0)) <= LIGHT_THRESHOLD);
        assert_eq!(
            compute_contrast(Some("rgb(128,128,128)")),
            derived("rgba(178, 178, 178, 0.7)", "#ffffff")
        );
        assert_eq!(compute_contrast(Some("grey")), compute_contrast(Some("rgb(128,128,128)")));
    }

    #[test]
    fn test_luma_exactly_at_threshold_is_dark() {
        let rgb = Rgb::new(4.0, 210.0, 31.0);
        assert_eq!(luma(rgb), 128.0);
        assert_eq!(Shade::of(rgb), Shade::Dark);
        assert_eq!(
            compute_contrast(Some("rgb(4, 210, 31)")).button_text,
            TEXT_ON_DARK
        );
    }

    #[test]
    fn test_just_above_threshold_is_light() {
        assert_eq!(Shade::of(Rgb::new(129.0, 128.0, 128.0)), Shade::Light);
    }

    #[test]
    fn test_light_branch_keeps_fractional_channels() {
        // 224 × 0.8 is not exactly representable; the raw float is printed.
        assert_eq!(
            compute_contrast(Some("#e0e0e0")).button_background,
            "rgba(179.20000000000002, 179.20000000000002, 179.20000000000002, 0.7)"
        );
        assert_eq!(
            compute_contrast(Some("rgb(129, 128, 128)")).button_background,
            "rgba(103.2, 102.4, 102.4, 0.7)"
        );
    }

    #[test]
    fn test_wide_functional_channel_is_carried_through() {
        // Luma is far above the threshold, so the huge red channel is scaled.
        assert_eq!(
            compute_contrast(Some("rgb(5000000000, 0, 0)")),
            derived("rgba(4000000000, 0, 0, 0.7)", "#000000")
        );
    }

    #[test]
    fn test_dark_branch_prints_whole_numbers() {
        assert_eq!(
            compute_contrast(Some("#123456")),
            derived("rgba(68, 102, 136, 0.7)", "#ffffff")
        );
    }

    #[test]
    fn test_luma_weights() {
        assert!((luma(Rgb::new(255.0, 0.0, 0.0)) - 76.245).abs() < 1e-9);
        assert!((luma(Rgb::new(0.0, 0.0, 255.0)) - 29.07).abs() < 1e-9);
        assert_eq!(luma(Rgb::WHITE), 255.0);
    }

    #[test]
    fn test_derived_colors_serialize_snake_case() {
        let json = serde_json::to_value(compute_contrast(Some("black"))).unwrap();
        assert_eq!(json["button_background"], "rgba(50, 50, 50, 0.7)");
        assert_eq!(json["button_text"], "#ffffff");
    }
}
