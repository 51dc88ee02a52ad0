//! Color specifications — parsing the three accepted textual forms to RGB.

pub mod form;
pub mod named;
pub mod rgb;

pub use form::{ColorForm, parse_color};
pub use rgb::Rgb;
