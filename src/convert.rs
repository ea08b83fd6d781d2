//! Conversions between the HEX, RGB and HSL representations of a color.
//!
//! The typed conversions live on the models themselves ([`Rgb::to_hsl`],
//! [`Hsl::to_rgb`], ...). The free functions in this module are the string
//! level entry points: they accept HEX strings the way a UI layer hands them
//! over and return uppercase `#RRGGBB` strings.
//!
//! ```rust
//! use chromatone::{adjust_brightness, hex_to_rgb, Rgb};
//!
//! assert_eq!(hex_to_rgb("#abc").unwrap(), Rgb::new(0xAA, 0xBB, 0xCC));
//! assert_eq!(adjust_brightness("#7E7E7E", -100).unwrap(), "#1A1A1A");
//! ```

use crate::{
    error::Result,
    hsl::Hsl,
    rgb::{Rgb, Srgb, SrgbLinear},
};

/// Parse a HEX color string (`#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`).
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    crate::parse::parse_hex(hex)
}

/// Format a color as an uppercase `#RRGGBB` string.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

/// Convert a color to the HSL notation.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    rgb.to_hsl()
}

/// Convert a color from the HSL notation back to 8-bit RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl.to_rgb()
}

/// Parse a HEX color string and convert it to the HSL notation.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(hex_to_rgb(hex)?.to_hsl())
}

/// Convert a color from the HSL notation to an uppercase `#RRGGBB` string.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_rgb().to_hex()
}

/// Add `delta` to every channel of a HEX color, saturating at 0 and 255.
pub fn adjust_brightness(hex: &str, delta: i32) -> Result<String> {
    Ok(hex_to_rgb(hex)?.adjust_brightness(delta).to_hex())
}

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_srgb().to_components()).into()
    }

    /// Add `delta` to every channel, saturating at 0 and 255.
    ///
    /// This is a plain additive shift of the RGB channels, not a perceptual
    /// lightness change, so channels can clip unevenly at large deltas.
    pub fn adjust_brightness(&self, delta: i32) -> Self {
        Self::saturating(
            self.red as i32 + delta,
            self.green as i32 + delta,
            self.blue as i32 + delta,
        )
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to 8-bit RGB, rounding each
    /// channel to the nearest integer.
    pub fn to_rgb(&self) -> Rgb {
        Srgb::from(util::hsl_to_rgb(&self.to_components())).to_rgb()
    }
}

impl Srgb {
    /// Remove the sRGB gamma encoding.
    pub fn to_linear_light(&self) -> SrgbLinear {
        util::to_linear_light(&self.to_components()).into()
    }
}

impl SrgbLinear {
    /// Apply the sRGB gamma encoding.
    pub fn to_gamma_encoded(&self) -> Srgb {
        util::to_gamma_encoded(&self.to_components()).into()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{almost_zero, normalize_hue},
    };

    /// Convert from RGB notation to HSL notation. Achromatic colors get a hue
    /// and saturation of zero.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let lightness = (max + min) / 2.0;

        let delta = max - min;

        if almost_zero(delta) {
            return Components(0.0, 0.0, lightness);
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = 60.0
            * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        Components(normalize_hue(hue), saturation, lightness)
    }

    /// Interpolate one channel for a hue given in degrees.
    fn hue_to_channel(p: Component, q: Component, hue: Component) -> Component {
        let hue = normalize_hue(hue);
        if hue < 60.0 {
            p + (q - p) * (hue / 60.0)
        } else if hue < 180.0 {
            q
        } else if hue < 240.0 {
            p + (q - p) * ((240.0 - hue) / 60.0)
        } else {
            p
        }
    }

    /// Convert from HSL notation to RGB notation.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Components(
            hue_to_channel(p, q, hue + 120.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 120.0),
        )
    }

    pub fn to_linear_light(from: &Components) -> Components {
        from.map(|value| {
            let abs = value.abs();

            if abs < 0.04045 {
                value / 12.92
            } else {
                value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
            }
        })
    }

    pub fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|value| {
            let abs = value.abs();

            if abs > 0.0031308 {
                value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
            } else {
                12.92 * value
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::Component;

    #[test]
    fn hex_parsing_and_formatting() {
        assert_eq!(hex_to_rgb("#FF00AA").unwrap(), Rgb::new(255, 0, 170));
        assert_eq!(hex_to_rgb("ff00aa").unwrap(), Rgb::new(255, 0, 170));
        assert_eq!(rgb_to_hex(Rgb::new(255, 0, 170)), "#FF00AA");
        assert_eq!(rgb_to_hex(hex_to_rgb("#1a2b3c").unwrap()), "#1A2B3C");
    }

    #[test]
    fn brightness_ladder_arithmetic() {
        // 126 - 100 = 26 = 0x1A
        assert_eq!(adjust_brightness("#7E7E7E", -100).unwrap(), "#1A1A1A");
        // 126 + 100 = 226 = 0xE2, no clamping.
        assert_eq!(adjust_brightness("#7E7E7E", 100).unwrap(), "#E2E2E2");
        assert_eq!(adjust_brightness("#F0F0F0", 100).unwrap(), "#FFFFFF");
        assert_eq!(adjust_brightness("#101010", -100).unwrap(), "#000000");
    }

    #[test]
    fn brightness_clips_channels_unevenly() {
        let rgb = Rgb::new(250, 100, 10).adjust_brightness(20);
        assert_eq!(rgb, Rgb::new(255, 120, 30));
        let rgb = Rgb::new(250, 100, 10).adjust_brightness(-20);
        assert_eq!(rgb, Rgb::new(230, 80, 0));
    }

    #[test]
    fn invalid_hex_propagates() {
        assert!(adjust_brightness("#12", 10).is_err());
        assert!(hex_to_hsl("not a color").is_err());
    }

    #[test]
    fn rgb_to_hsl_known_values() {
        let hsl = Rgb::new(255, 0, 0).to_hsl();
        assert_component_eq!(hsl.hue, 0.0);
        assert_component_eq!(hsl.saturation, 1.0);
        assert_component_eq!(hsl.lightness, 0.5);

        // chocolate, rgb(210, 105, 30)
        let hsl = Rgb::new(210, 105, 30).to_hsl();
        assert_component_eq!(hsl.hue, 25.0);
        assert_component_eq!(hsl.saturation, 0.75);
        assert_component_eq!(hsl.lightness, 0.470588);

        let hsl = Rgb::new(0, 0, 255).to_hsl();
        assert_component_eq!(hsl.hue, 240.0);

        let hsl = Rgb::new(255, 0, 128).to_hsl();
        assert!(hsl.hue > 300.0 && hsl.hue < 360.0);
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        for rgb in [Rgb::BLACK, Rgb::WHITE, Rgb::new(126, 126, 126)] {
            let hsl = rgb.to_hsl();
            assert_eq!(hsl.hue, 0.0);
            assert_eq!(hsl.saturation, 0.0);
        }
    }

    #[test]
    fn hsl_to_rgb_known_values() {
        assert_eq!(Hsl::new(180.0, 1.0, 0.5).to_rgb(), Rgb::new(0, 255, 255));
        assert_eq!(Hsl::new(120.0, 1.0, 0.5).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsl::new(240.0, 1.0, 0.5).to_rgb(), Rgb::new(0, 0, 255));
        assert_eq!(Hsl::new(25.0, 0.75, 0.470588).to_rgb(), Rgb::new(210, 105, 30));
        assert_eq!(Hsl::new(0.0, 0.0, 0.5).to_rgb(), Rgb::new(128, 128, 128));
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 0.0, 1.0)), "#FFFFFF");
    }

    #[test]
    fn hue_outside_range_wraps() {
        assert_eq!(
            Hsl::new(-180.0, 1.0, 0.5).to_rgb(),
            Hsl::new(180.0, 1.0, 0.5).to_rgb()
        );
        assert_eq!(
            Hsl::new(480.0, 1.0, 0.5).to_rgb(),
            Hsl::new(120.0, 1.0, 0.5).to_rgb()
        );
    }

    #[test]
    fn gamma_round_trip() {
        let srgb = Srgb::new(0.823529, 0.411765, 0.117647);
        let linear = srgb.to_linear_light();
        assert_component_eq!(linear.red, 0.644480);
        assert_component_eq!(linear.green, 0.141263);
        assert_component_eq!(linear.blue, 0.012983);

        let back = linear.to_gamma_encoded();
        assert_component_eq!(back.red, srgb.red);
        assert_component_eq!(back.green, srgb.green);
        assert_component_eq!(back.blue, srgb.blue);
    }

    #[test]
    fn gamma_is_linear_near_black() {
        let linear = Srgb::new(0.02, 0.0, 0.01).to_linear_light();
        assert_component_eq!(linear.red, 0.02 / 12.92 as Component);
        assert_component_eq!(linear.green, 0.0);
    }
}
