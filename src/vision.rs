//! Simulate how colors appear to viewers with a color vision deficiency.
//!
//! The dichromacy matrices are the full severity matrices from Machado,
//! Oliveira and Fernandes (2009), applied to linear light sRGB.
//! <https://www.inf.ufrgs.br/~oliveira/pubs_files/CVD_Simulation/CVD_Simulation.html>

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    math::{transform, transform_3x3, Transform},
    palette::Palette,
    rgb::{Rgb, SrgbLinear},
};

/// A color vision deficiency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    /// No functioning long wavelength (red) cones.
    Protanopia,
    /// No functioning medium wavelength (green) cones.
    Deuteranopia,
    /// No functioning short wavelength (blue) cones.
    Tritanopia,
    /// No color perception at all.
    Achromatopsia,
}

impl Deficiency {
    /// Every supported deficiency.
    pub const ALL: [Self; 4] = [
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Achromatopsia,
    ];

    /// The lowercase name used when parsing and displaying.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }

    fn transform(&self) -> &'static Transform {
        match self {
            Self::Protanopia => &PROTANOPIA,
            Self::Deuteranopia => &DEUTERANOPIA,
            Self::Tritanopia => &TRITANOPIA,
            Self::Achromatopsia => &ACHROMATOPSIA,
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Deficiency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnsupportedDeficiency(s.to_owned()))
    }
}

#[rustfmt::skip]
const PROTANOPIA: Transform = transform_3x3(
     0.152286,  0.114503, -0.003882,
     1.052583,  0.786281, -0.048116,
    -0.204868,  0.099216,  1.051998,
);

#[rustfmt::skip]
const DEUTERANOPIA: Transform = transform_3x3(
     0.367322,  0.280085, -0.011820,
     0.860646,  0.672501,  0.042940,
    -0.227968,  0.047413,  0.968881,
);

#[rustfmt::skip]
const TRITANOPIA: Transform = transform_3x3(
     1.255528, -0.078411,  0.004733,
    -0.076749,  0.930809,  0.691367,
    -0.178779,  0.147602,  0.303900,
);

// Every output channel is the relative luminance.
#[rustfmt::skip]
const ACHROMATOPSIA: Transform = transform_3x3(
    0.2126, 0.2126, 0.2126,
    0.7152, 0.7152, 0.7152,
    0.0722, 0.0722, 0.0722,
);

/// Simulate how `rgb` appears to a viewer with the given deficiency.
pub fn simulate(rgb: Rgb, deficiency: Deficiency) -> Rgb {
    let linear = rgb.to_srgb().to_linear_light();
    let simulated = transform(deficiency.transform(), linear.to_components());
    SrgbLinear::from(simulated).to_gamma_encoded().to_rgb()
}

/// Simulate every color of a palette, keeping the order.
pub fn simulate_palette(colors: &[Rgb], deficiency: Deficiency) -> Palette {
    log::debug!("simulating {} colors for {deficiency}", colors.len());
    colors
        .iter()
        .map(|&c| simulate(c, deficiency))
        .collect::<Vec<_>>()
        .into()
}
