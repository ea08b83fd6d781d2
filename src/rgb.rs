//! Model a color in the sRGB color space.
//!
//! [`Rgb`] is the 8-bit integer form every HEX string decodes to. [`Srgb`]
//! and [`SrgbLinear`] are the normalized floating point forms used for
//! luminance and simulation math.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Component;

/// A color in the sRGB color space with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white, `#FFFFFF`.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new color from 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a new color from channels that might be out of range. Each
    /// channel saturates at 0 and 255.
    pub fn saturating(red: i32, green: i32, blue: i32) -> Self {
        let clamp = |v: i32| v.clamp(0, 255) as u8;
        Self::new(clamp(red), clamp(green), clamp(blue))
    }

    /// Decode a packed big-endian `0xRRGGBB` value.
    pub const fn from_u32(value: u32) -> Self {
        Self::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Pack the channels into a big-endian `0xRRGGBB` value.
    pub const fn to_u32(&self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// Return the channels as an array.
    pub const fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Format the color as an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Format the color as a CSS `rgb(r, g, b)` function.
    pub fn to_css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    /// Normalize the channels into the [0, 1] range.
    pub fn to_srgb(&self) -> Srgb {
        let n = |v: u8| v as Component / 255.0;
        Srgb::new(n(self.red), n(self.green), n(self.blue))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.to_array()
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

chromatone_macros::gen_model! {
    /// A color in the sRGB color space with gamma encoded components in the
    /// range [0, 1].
    pub struct Srgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Srgb {
    /// Quantize to 8-bit channels, clamping out of range components and
    /// rounding to the nearest integer.
    pub fn to_rgb(&self) -> Rgb {
        let q = |v: Component| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb::new(q(self.red), q(self.green), q(self.blue))
    }
}

chromatone_macros::gen_model! {
    /// A color in the sRGB color space with no gamma encoding.
    pub struct SrgbLinear {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_clamps_each_channel() {
        assert_eq!(Rgb::saturating(-20, 128, 300), Rgb::new(0, 128, 255));
        assert_eq!(Rgb::saturating(0, 255, 256), Rgb::new(0, 255, 255));
    }

    #[test]
    fn packed_values() {
        let rgb = Rgb::from_u32(0x12AB34);
        assert_eq!(rgb, Rgb::new(0x12, 0xAB, 0x34));
        assert_eq!(rgb.to_u32(), 0x12AB34);
    }

    #[test]
    fn display_is_uppercase_hex() {
        assert_eq!(Rgb::new(0xAB, 0x0C, 0xFF).to_string(), "#AB0CFF");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::WHITE.to_hex(), "#FFFFFF");
    }

    #[test]
    fn css_rgb_function() {
        assert_eq!(Rgb::new(1, 22, 255).to_css_rgb(), "rgb(1, 22, 255)");
    }

    #[test]
    fn srgb_quantization() {
        let srgb = Rgb::new(0, 128, 255).to_srgb();
        assert_eq!(srgb.to_rgb(), Rgb::new(0, 128, 255));

        let out_of_range = Srgb::new(-0.2, 0.5, 1.3);
        assert_eq!(out_of_range.to_rgb(), Rgb::new(0, 128, 255));
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 170)).unwrap();
        assert_eq!(json, "\"#FF00AA\"");

        let rgb: Rgb = serde_json::from_str("\"#abc\"").unwrap();
        assert_eq!(rgb, Rgb::new(0xAA, 0xBB, 0xCC));
    }
}
