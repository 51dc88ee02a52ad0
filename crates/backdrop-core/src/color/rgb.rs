//! RGB triple.

use serde::{Deserialize, Serialize};

/// Three whole-number channels on the 0–255 scale.
///
/// Channels are stored as `f64` so functional specs can carry any digit run
/// unchanged: `rgb(5000000000, 0, 0)` has a red channel of 5e9, and
/// downstream math works with it as-is. Nothing is clamped on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Pure white, also the fallback for anything that fails to parse.
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in R, G, B order.
    pub const fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}
