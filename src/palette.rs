//! Palette generation from a single seed color.
//!
//! Every harmony converts the seed to HSL, rotates the hue by fixed offsets,
//! converts back, and pads the result with shades taken from the
//! monochromatic brightness ladder of specific members. The order of the
//! returned colors is significant: index 0 is the seed (or its closest
//! harmony member) and later indices hold partner hues and then shades.
//!
//! ```rust
//! use chromatone::{generate, Harmony};
//!
//! let palette = generate("#FF0000", Harmony::Complementary).unwrap();
//! assert_eq!(palette.len(), 8);
//! assert_eq!(palette[1].to_hex(), "#00FFFF");
//! ```

use std::{fmt, ops::Deref, ops::Range, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    contrast::is_accessible_on_white,
    error::{Error, Result},
    parse::parse_hex,
    rgb::Rgb,
};

/// Number of colors in every palette except the theme palette.
pub const PALETTE_SIZE: usize = 8;

/// Number of colors in the theme palette.
pub const THEME_SIZE: usize = 6;

/// Brightness difference between two rungs of the monochromatic ladder.
pub const LADDER_STEP: i32 = 25;

/// Brightness deltas applied to the seed for each theme accent.
pub const THEME_DELTAS: [i32; THEME_SIZE] = [-100, -66, -33, 0, 33, 66];

/// Maximum attempts at making a theme accent readable on white.
pub const THEME_MAX_ATTEMPTS: usize = 10;

/// Brightness change applied to a theme accent after each failed attempt.
pub const THEME_NUDGE: i32 = -10;

/// A color harmony, selecting how a palette is derived from its seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Harmony {
    /// Brightness variations of the seed.
    Monochromatic,
    /// The seed and its neighbors 30 degrees either side.
    Analogous,
    /// The seed and the hue opposite it.
    Complementary,
    /// The seed and the two hues either side of its complement.
    SplitComplementary,
    /// Three hues evenly spaced around the wheel.
    Triadic,
    /// Four hues forming two complementary pairs.
    Tetradic,
    /// Six accent colors readable on a white slide.
    PowerpointTheme,
    /// Eight unrelated random colors.
    Random,
}

impl Harmony {
    /// All harmonies, in the order a picker lists them.
    pub const ALL: [Harmony; 8] = [
        Harmony::Monochromatic,
        Harmony::Analogous,
        Harmony::Complementary,
        Harmony::SplitComplementary,
        Harmony::Triadic,
        Harmony::Tetradic,
        Harmony::PowerpointTheme,
        Harmony::Random,
    ];

    /// The tag used to select this harmony from a string.
    pub const fn tag(&self) -> &'static str {
        match self {
            Harmony::Monochromatic => "monochromatic",
            Harmony::Analogous => "analogous",
            Harmony::Complementary => "complementary",
            Harmony::SplitComplementary => "splitComplementary",
            Harmony::Triadic => "triadic",
            Harmony::Tetradic => "tetradic",
            Harmony::PowerpointTheme => "powerpointTheme",
            Harmony::Random => "random",
        }
    }

    /// A short human readable explanation of the harmony.
    pub const fn description(&self) -> &'static str {
        match self {
            Harmony::Monochromatic => "A monochromatic palette uses variations of the same hue by adjusting brightness. It's simple and harmonious.",
            Harmony::Analogous => "Analogous colors sit next to each other on the color wheel, providing a soothing and natural look.",
            Harmony::Complementary => "Complementary colors are opposite each other on the color wheel, offering a striking contrast that can be visually impactful.",
            Harmony::SplitComplementary => "Split complementary is similar to complementary, but uses the two colors adjacent to the complement for less tension.",
            Harmony::Triadic => "A triadic color scheme uses three evenly spaced colors on the color wheel, offering a balanced and vibrant palette.",
            Harmony::Tetradic => "Tetradic palettes use two complementary pairs, resulting in a rich and varied look.",
            Harmony::PowerpointTheme => "The PowerPoint Theme gives you your accent colors from Accent 1 - Accent 6.",
            Harmony::Random => "A random palette of eight distinct colors.",
        }
    }

    /// The number of colors a palette of this harmony holds.
    pub const fn palette_size(&self) -> usize {
        match self {
            Harmony::PowerpointTheme => THEME_SIZE,
            _ => PALETTE_SIZE,
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Harmony {
    type Err = Error;

    /// Match a tag, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        Harmony::ALL
            .into_iter()
            .find(|h| h.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnsupportedPaletteType(s.to_owned()))
    }
}

/// An ordered list of colors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Rgb>);

impl Palette {
    /// Wrap an ordered list of colors.
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self(colors)
    }

    /// The colors, in order.
    pub fn colors(&self) -> &[Rgb] {
        &self.0
    }

    /// Format every color as an uppercase `#RRGGBB` string.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.0.iter().map(Rgb::to_hex).collect()
    }

    /// Unwrap into the list of colors.
    pub fn into_inner(self) -> Vec<Rgb> {
        self.0
    }
}

impl Deref for Palette {
    type Target = [Rgb];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Rgb>> for Palette {
    fn from(value: Vec<Rgb>) -> Self {
        Self(value)
    }
}

impl IntoIterator for Palette {
    type Item = Rgb;
    type IntoIter = std::vec::IntoIter<Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgb;
    type IntoIter = std::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The 8 rung brightness ladder of a color: deltas of `i * 25` for `i` in
/// -4..=3. The unmodified color sits at index 4.
pub fn monochromatic_ladder(seed: Rgb) -> [Rgb; PALETTE_SIZE] {
    std::array::from_fn(|i| seed.adjust_brightness((i as i32 - 4) * LADDER_STEP))
}

/// Rotate the hue of `seed` by each offset, keeping saturation and lightness.
fn rotations(seed: Rgb, offsets: &[Component]) -> Vec<Rgb> {
    let hsl = seed.to_hsl();
    offsets
        .iter()
        .map(|&offset| hsl.rotate_hue(offset).to_rgb())
        .collect()
}

/// Append the given ladder rungs of each color, then cut to size.
fn with_shades(mut colors: Vec<Rgb>, shades: &[(Rgb, Range<usize>)]) -> Palette {
    for (color, rungs) in shades {
        colors.extend_from_slice(&monochromatic_ladder(*color)[rungs.clone()]);
    }
    colors.truncate(PALETTE_SIZE);
    Palette(colors)
}

/// Brightness variations of the seed, darkest first.
pub fn generate_monochromatic(seed: Rgb) -> Palette {
    Palette(monochromatic_ladder(seed).to_vec())
}

/// The seed's hue rotated by -30, 0 and +30 degrees, followed by shades.
pub fn generate_analogous(seed: Rgb) -> Palette {
    let colors = rotations(seed, &[-30.0, 0.0, 30.0]);
    let shades = [
        (colors[0], 1..3),
        (colors[1], 1..3),
        (colors[2], 1..2),
    ];
    with_shades(colors, &shades)
}

/// The seed and its complement, followed by shades of both.
pub fn generate_complementary(seed: Rgb) -> Palette {
    let complement = seed.to_hsl().rotate_hue(180.0).to_rgb();
    // Two seed shades and three complement shades only make 7 colors, so a
    // second -50 shade of the seed fills the last slot.
    let shades = [(seed, 1..3), (complement, 1..4), (seed, 2..3)];
    with_shades(vec![seed, complement], &shades)
}

/// The seed and the hues at +150 and +210 degrees, followed by shades.
pub fn generate_split_complementary(seed: Rgb) -> Palette {
    let hsl = seed.to_hsl();
    let first = hsl.rotate_hue(150.0).to_rgb();
    let second = hsl.rotate_hue(210.0).to_rgb();
    let shades = [(seed, 1..3), (first, 1..3), (second, 1..2)];
    with_shades(vec![seed, first, second], &shades)
}

/// Three hues 120 degrees apart, followed by shades.
pub fn generate_triadic(seed: Rgb) -> Palette {
    let colors = rotations(seed, &[0.0, 120.0, 240.0]);
    let shades = [
        (colors[0], 1..3),
        (colors[1], 1..3),
        (colors[2], 1..2),
    ];
    with_shades(colors, &shades)
}

/// Four hues 90 degrees apart, followed by shades. The shade of the third
/// hue does not fit and is cut.
pub fn generate_tetradic(seed: Rgb) -> Palette {
    let colors = rotations(seed, &[0.0, 90.0, 180.0, 270.0]);
    let shades = [
        (colors[0], 1..3),
        (colors[1], 1..3),
        (colors[2], 1..2),
    ];
    with_shades(colors, &shades)
}

/// Six accent colors derived from the seed by [`THEME_DELTAS`]. Each accent
/// is darkened by [`THEME_NUDGE`] until it is readable on white, giving up
/// after [`THEME_MAX_ATTEMPTS`].
pub fn generate_powerpoint_theme(seed: Rgb) -> Palette {
    let colors = THEME_DELTAS
        .iter()
        .map(|&delta| {
            let mut accent = seed.adjust_brightness(delta);
            let mut attempts = 1;
            while !is_accessible_on_white(accent) && attempts < THEME_MAX_ATTEMPTS {
                accent = accent.adjust_brightness(THEME_NUDGE);
                attempts += 1;
            }
            if !is_accessible_on_white(accent) {
                log::warn!(
                    "theme accent {accent} for delta {delta} is not readable on white after {attempts} attempts"
                );
            }
            accent
        })
        .collect();

    Palette(colors)
}

/// A random color made of 6 uniformly sampled hex digits.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let value = (0..6).fold(0u32, |acc, _| acc << 4 | rng.gen_range(0..16u32));
    Rgb::from_u32(value)
}

/// Eight distinct random colors.
pub fn generate_random<R: Rng + ?Sized>(rng: &mut R) -> Palette {
    let mut colors = Vec::with_capacity(PALETTE_SIZE);
    while colors.len() < PALETTE_SIZE {
        let color = random_color(rng);
        if !colors.contains(&color) {
            colors.push(color);
        }
    }
    Palette(colors)
}

/// Generate a palette of the given harmony, drawing random colors from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(seed: Rgb, harmony: Harmony, rng: &mut R) -> Palette {
    log::debug!("generating {harmony} palette from {seed}");

    match harmony {
        Harmony::Monochromatic => generate_monochromatic(seed),
        Harmony::Analogous => generate_analogous(seed),
        Harmony::Complementary => generate_complementary(seed),
        Harmony::SplitComplementary => generate_split_complementary(seed),
        Harmony::Triadic => generate_triadic(seed),
        Harmony::Tetradic => generate_tetradic(seed),
        Harmony::PowerpointTheme => generate_powerpoint_theme(seed),
        Harmony::Random => generate_random(rng),
    }
}

/// Parse a HEX seed and generate a palette of the given harmony.
pub fn generate(hex: &str, harmony: Harmony) -> Result<Palette> {
    let seed = parse_hex(hex)?;
    Ok(generate_with_rng(seed, harmony, &mut rand::thread_rng()))
}

/// Parse a HEX seed and a harmony tag and generate the palette. Unknown tags
/// are an error rather than a fallback to monochromatic.
pub fn generate_from_tag(hex: &str, tag: &str) -> Result<Palette> {
    let harmony = tag.parse()?;
    generate(hex, harmony)
}
