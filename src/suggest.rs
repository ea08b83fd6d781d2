//! Search for a readable alternative to a color that fails the AA contrast
//! check against a fixed reference.

use crate::{
    color::Component,
    contrast::{contrast_ratio, passes_aa},
    error::Result,
    parse::parse_hex,
    rgb::Rgb,
};

/// Lightness change between two candidates of the search.
pub const LIGHTNESS_STEP: Component = 0.05;

/// Suggest a color close to `candidate` that passes the AA check against
/// `reference`.
///
/// The candidate's HSL lightness is stepped by [`LIGHTNESS_STEP`], down if it
/// starts above 0.5 and up otherwise, until the pair passes or lightness
/// reaches 0 or 1. This never fails: when no step passes, the candidate with
/// the highest contrast seen is returned, which may be `candidate` itself.
/// Callers that need a guarantee must check the result with
/// [`passes_aa`].
pub fn suggest_accessible_color(reference: Rgb, candidate: Rgb) -> Rgb {
    let original = contrast_ratio(reference, candidate);
    if passes_aa(original) {
        return candidate;
    }

    let darken = candidate.to_hsl().lightness > 0.5;

    let mut best = (candidate, original);
    let mut current = candidate;

    loop {
        // Lightness is re-derived from the quantized color on every step.
        let hsl = current.to_hsl();
        let lightness = if darken {
            hsl.lightness - LIGHTNESS_STEP
        } else {
            hsl.lightness + LIGHTNESS_STEP
        };

        current = hsl.with_lightness(lightness.clamp(0.0, 1.0)).to_rgb();
        let ratio = contrast_ratio(reference, current);
        log::trace!("suggestion step {current} at lightness {lightness}: {ratio}");

        if passes_aa(ratio) {
            log::debug!("suggested {current} for {candidate} on {reference} ({ratio})");
            return current;
        }

        if ratio > best.1 {
            best = (current, ratio);
        }

        if lightness <= 0.0 || lightness >= 1.0 {
            break;
        }
    }

    log::debug!(
        "no readable color for {candidate} on {reference}, best effort {} ({})",
        best.0,
        best.1
    );
    best.0
}

/// Parse two HEX colors and suggest a readable replacement for `candidate`.
pub fn suggest_accessible_hex(reference: &str, candidate: &str) -> Result<String> {
    let reference = parse_hex(reference)?;
    let candidate = parse_hex(candidate)?;
    Ok(suggest_accessible_color(reference, candidate).to_hex())
}
