//! WCAG 2.0 relative luminance and contrast ratio.
//! <https://www.w3.org/TR/WCAG20/#relativeluminancedef>

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{color::Component, error::Result, parse::parse_hex, rgb::Rgb};

/// Minimum contrast ratio for normal sized text at level AA.
pub const AA_THRESHOLD: Component = 4.5;

/// Minimum contrast ratio for large text at level AA.
pub const AA_LARGE_THRESHOLD: Component = 3.0;

/// Minimum contrast ratio for normal sized text at level AAA.
pub const AAA_THRESHOLD: Component = 7.0;

/// Minimum contrast ratio for large text at level AAA.
pub const AAA_LARGE_THRESHOLD: Component = 4.5;

bitflags! {
    /// The WCAG conformance levels a contrast ratio satisfies.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Conformance : u8 {
        /// Normal text at level AA.
        const AA = 1 << 0;
        /// Large text at level AA.
        const AA_LARGE = 1 << 1;
        /// Normal text at level AAA.
        const AAA = 1 << 2;
        /// Large text at level AAA.
        const AAA_LARGE = 1 << 3;
    }
}

impl Conformance {
    /// Return every level the given contrast ratio passes.
    pub fn from_ratio(ratio: Component) -> Self {
        let mut levels = Self::empty();
        levels.set(Self::AA, ratio >= AA_THRESHOLD);
        levels.set(Self::AA_LARGE, ratio >= AA_LARGE_THRESHOLD);
        levels.set(Self::AAA, ratio >= AAA_THRESHOLD);
        levels.set(Self::AAA_LARGE, ratio >= AAA_LARGE_THRESHOLD);
        levels
    }
}

/// The outcome of comparing two colors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// The contrast ratio, in [1, 21].
    pub ratio: Component,
    /// Whether the ratio meets [`AA_THRESHOLD`].
    pub passes_aa: bool,
    /// All conformance levels the ratio meets.
    pub conformance: Conformance,
}

impl ContrastResult {
    /// Judge a contrast ratio.
    pub fn from_ratio(ratio: Component) -> Self {
        Self {
            ratio,
            passes_aa: passes_aa(ratio),
            conformance: Conformance::from_ratio(ratio),
        }
    }
}

fn linearize(channel: u8) -> Component {
    let c = channel as Component / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color, in [0, 1].
pub fn relative_luminance(rgb: Rgb) -> Component {
    0.2126 * linearize(rgb.red) + 0.7152 * linearize(rgb.green) + 0.0722 * linearize(rgb.blue)
}

/// Compute the contrast ratio between two colors. The result is the same
/// regardless of argument order.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> Component {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Parse two HEX colors and compute their contrast ratio.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<Component> {
    Ok(contrast_ratio(parse_hex(a)?, parse_hex(b)?))
}

/// Return true if the ratio meets the AA threshold for normal text.
pub fn passes_aa(ratio: Component) -> bool {
    ratio >= AA_THRESHOLD
}

/// Compare two colors and judge the result.
pub fn check_contrast(a: Rgb, b: Rgb) -> ContrastResult {
    ContrastResult::from_ratio(contrast_ratio(a, b))
}

/// Return true if the color is readable as text on a white background.
pub fn is_accessible_on_white(rgb: Rgb) -> bool {
    passes_aa(contrast_ratio(rgb, Rgb::WHITE))
}

/// Pick black or white text for the given background, based on perceived
/// brightness.
pub fn contrasting_text_color(background: Rgb) -> Rgb {
    let brightness = (background.red as u32 * 299
        + background.green as u32 * 587
        + background.blue as u32 * 114)
        / 1000;
    if brightness >= 128 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// Find the pair of colors with the highest contrast ratio. Ties keep the
/// earliest pair. Returns `None` for fewer than two colors.
pub fn highest_contrast_pair(colors: &[Rgb]) -> Option<(Rgb, Rgb, Component)> {
    let mut best: Option<(Rgb, Rgb, Component)> = None;

    for (i, &a) in colors.iter().enumerate() {
        for &b in &colors[i + 1..] {
            let ratio = contrast_ratio(a, b);
            if best.map_or(true, |(_, _, r)| ratio > r) {
                best = Some((a, b, ratio));
            }
        }
    }

    best
}

/// Sort colors by their contrast against the first color, highest first.
/// The sort is stable, so the first color (contrast 1) ends up after every
/// color that differs from it.
pub fn sort_by_contrast(colors: &[Rgb]) -> Vec<Rgb> {
    let Some(&reference) = colors.first() else {
        return Vec::new();
    };

    let mut sorted = colors.to_vec();
    sorted.sort_by(|a, b| {
        contrast_ratio(*b, reference).total_cmp(&contrast_ratio(*a, reference))
    });
    sorted
}
