//! chromatone provides the color primitives needed to build accessible color
//! palettes: HEX, RGB and HSL conversion, WCAG 2.0 contrast checks, color
//! harmony generators and a search for readable alternatives.
//!
//! ```rust
//! use chromatone::{contrast_ratio_hex, generate, Harmony};
//!
//! let palette = generate("#FF0000", Harmony::Triadic).unwrap();
//! assert_eq!(palette.len(), 8);
//!
//! let ratio = contrast_ratio_hex("#000", "#FFF").unwrap();
//! assert!(ratio > 20.9);
//! ```

#![deny(missing_docs)]


mod color;
mod contrast;
mod convert;
mod error;
mod export;
mod hsl;
mod math;
mod palette;
mod parse;
mod rgb;
mod suggest;
mod vision;

pub use color::{Component, Components};
pub use contrast::{
    check_contrast, contrast_ratio, contrast_ratio_hex, contrasting_text_color,
    highest_contrast_pair, is_accessible_on_white, passes_aa, relative_luminance,
    sort_by_contrast, Conformance, ContrastResult, AAA_LARGE_THRESHOLD, AAA_THRESHOLD,
    AA_LARGE_THRESHOLD, AA_THRESHOLD,
};
pub use convert::{
    adjust_brightness, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl,
};
pub use error::{Error, Result};
pub use export::{export, ExportFormat, SWATCH_SIZE};
pub use hsl::Hsl;
pub use palette::{
    generate, generate_analogous, generate_complementary, generate_from_tag,
    generate_monochromatic, generate_powerpoint_theme, generate_random,
    generate_split_complementary, generate_tetradic, generate_triadic, generate_with_rng,
    monochromatic_ladder, random_color, Harmony, Palette, LADDER_STEP, PALETTE_SIZE,
    THEME_DELTAS, THEME_MAX_ATTEMPTS, THEME_NUDGE, THEME_SIZE,
};
pub use parse::{is_valid_hex, parse_css_rgb, parse_hex};
pub use rgb::{Rgb, Srgb, SrgbLinear};
pub use suggest::{suggest_accessible_color, suggest_accessible_hex, LIGHTNESS_STEP};
pub use vision::{simulate, simulate_palette, Deficiency};
