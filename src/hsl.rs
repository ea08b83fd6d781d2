//! Model a color with the HSL notation in the sRGB color space.

use serde::{Deserialize, Serialize};

use crate::color::Component;
use crate::math::normalize_hue;

chromatone_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    ///
    /// The hue is in degrees so harmony offsets can be added directly.
    #[derive(Serialize, Deserialize)]
    pub struct Hsl {
        /// The hue component of the color, in degrees [0, 360).
        hue: Component,
        /// The saturation component of the color, in [0, 1].
        saturation: Component,
        /// The lightness component of the color, in [0, 1].
        lightness: Component,
    }
}

impl Hsl {
    /// Return a copy of this color with the hue rotated by `degrees`,
    /// wrapped into [0, 360).
    pub fn rotate_hue(&self, degrees: Component) -> Self {
        Self::new(
            normalize_hue(self.hue + degrees),
            self.saturation,
            self.lightness,
        )
    }

    /// Return a copy of this color with a different lightness.
    pub fn with_lightness(&self, lightness: Component) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::Components;

    #[test]
    fn rotation_wraps() {
        let hsl = Hsl::new(300.0, 0.5, 0.4).rotate_hue(90.0);
        assert_component_eq!(hsl.hue, 30.0);
        assert_component_eq!(hsl.saturation, 0.5);
        assert_component_eq!(hsl.lightness, 0.4);

        let hsl = Hsl::new(10.0, 0.5, 0.4).rotate_hue(-30.0);
        assert_component_eq!(hsl.hue, 340.0);
    }

    #[test]
    fn components_round_trip() {
        let hsl = Hsl::from(Components(25.0, 0.75, 0.47));
        assert_eq!(hsl.to_components(), Components(25.0, 0.75, 0.47));
        assert_eq!(Components::from(hsl), Components(25.0, 0.75, 0.47));
    }
}
