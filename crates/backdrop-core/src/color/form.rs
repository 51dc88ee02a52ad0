//! Classification of a color specification into one of its three forms.

use super::Rgb;
use super::named::lookup_named;

/// The textual form a color specification takes, chosen from its leading
/// characters.
///
/// Dispatch is decided once: a spec that starts with `#` is only ever parsed
/// as hex, and one that starts with `rgb` only as functional notation, even
/// when that parse fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorForm<'a> {
    /// `#rgb` or `#rrggbb`. Holds the digits after the `#`.
    Hex(&'a str),
    /// `rgb(...)` or `rgba(...)`, comma- or space-separated.
    Functional(&'a str),
    /// Anything else, looked up in the named color table.
    Named(&'a str),
}

impl<'a> ColorForm<'a> {
    pub fn classify(spec: &'a str) -> Self {
        if let Some(digits) = spec.strip_prefix('#') {
            Self::Hex(digits)
        } else if spec.starts_with("rgb") {
            Self::Functional(spec)
        } else {
            Self::Named(spec)
        }
    }

    /// Resolve to an RGB triple. Never fails: anything unparseable resolves
    /// to [`Rgb::WHITE`] and emits a warning.
    pub fn resolve(&self) -> Rgb {
        let parsed = match self {
            Self::Hex(digits) => parse_hex_digits(digits),
            Self::Functional(spec) => parse_functional(spec),
            Self::Named(name) => lookup_named(name),
        };

        parsed.unwrap_or_else(|| {
            tracing::warn!("Unrecognized color {:?}, falling back to white", self);
            Rgb::WHITE
        })
    }
}

/// Parse a color specification straight to RGB.
pub fn parse_color(spec: &str) -> Rgb {
    ColorForm::classify(spec).resolve()
}

/// Parse three or six hex digits (no leading `#`), case-insensitive.
///
/// The three-digit shorthand expands by doubling each digit, so `abc`
/// reads as `aabbcc`.
fn parse_hex_digits(digits: &str) -> Option<Rgb> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_owned(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok().map(f64::from);
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Take the first three runs of ASCII digits as R, G and B.
///
/// Separators are irrelevant, so `rgb(1,2,3)`, `rgb(1 2 3)` and
/// `rgba(1, 2, 3, 0.5)` all read as (1, 2, 3). Runs have no size limit; a
/// run past 2^53 keeps only the precision an `f64` can hold.
fn parse_functional(spec: &str) -> Option<Rgb> {
    let mut runs = spec
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse::<f64>().ok());

    Some(Rgb::new(runs.next()?, runs.next()?, runs.next()?))
}
