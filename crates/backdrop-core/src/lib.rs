//! Backdrop Core — domain layer for background colors.
//!
//! Parses color specifications (hex, functional `rgb()`/`rgba()`, and a small
//! set of named colors) and derives a legible button palette for a given
//! background. No async, storage, or UI dependencies.

pub mod color;
pub mod contrast;

// Re-exports for convenience.
pub use color::{ColorForm, Rgb, parse_color};
pub use contrast::{DerivedColors, Shade, compute_contrast, luma};
