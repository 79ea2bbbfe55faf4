//! Conversions between the representations. Every conversion has RGBA on one
//! side; converting between HSL and CMYK always hops through RGBA.
//!
//! Conversions only operate on the color channels. Alpha is passed through
//! from the RGBA side, since neither HSL nor CMYK carries one.
//!
//! NOTE: When a formula divides by zero the channel is powerless and is set to
//!       0 instead of NaN. [`Rgba::degeneracies`] reports which channels that
//!       happened to.
//!
//! ```rust
//! use colorslide::models::Rgba;
//! let red = Rgba::opaque(1.0, 0.0, 0.0);
//! let cmyk = red.to_cmyk();
//! let back = cmyk.to_rgba(red.alpha).to_hsl();
//! assert_eq!(back.lightness, 0.5);
//! ```

use crate::{
    color::Flags,
    models::{Cmyk, Hsl, Rgba},
};

impl Rgba {
    /// Convert the color channels to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl([self.red, self.green, self.blue]).into()
    }

    /// Convert the color channels to the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        util::rgb_to_cmyk([self.red, self.green, self.blue]).into()
    }

    /// Report which channels of [`Rgba::to_hsl`] and [`Rgba::to_cmyk`] are
    /// powerless for this color.
    pub fn degeneracies(&self) -> Flags {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);

        let mut flags = Flags::empty();
        if max - min == 0.0 {
            flags |= Flags::HUE_IS_POWERLESS | Flags::SATURATION_IS_POWERLESS;
        }
        if max == 0.0 {
            flags |= Flags::CMY_IS_POWERLESS;
        }
        flags
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGBA, using the given
    /// alpha.
    pub fn to_rgba(&self, alpha: crate::Component) -> Rgba {
        let [red, green, blue] = util::hsl_to_rgb([self.hue, self.saturation, self.lightness]);
        Rgba::new(red, green, blue, alpha)
    }
}

impl Cmyk {
    /// Convert this color from the CMYK notation to RGBA, using the given
    /// alpha.
    pub fn to_rgba(&self, alpha: crate::Component) -> Rgba {
        let [red, green, blue] =
            util::cmyk_to_rgb([self.cyan, self.magenta, self.yellow, self.key]);
        Rgba::new(red, green, blue, alpha)
    }
}

mod util {
    use crate::{color::Component, math::normalize_circular};

    /// Convert from RGB notation to HSL notation.
    pub fn rgb_to_hsl(from: [Component; 3]) -> [Component; 3] {
        let [red, green, blue] = from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            return [0.0, 0.0, lightness];
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // Ties resolve towards red, then green.
        let hue = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        // A hair below 0 plus 6 can round up to exactly 6.
        [normalize_circular(hue / 6.0), saturation, lightness]
    }

    /// Pick the value of a single RGB channel from its hue offset `t`.
    fn hue_to_channel(p: Component, q: Component, t: Component) -> Component {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    /// Convert from HSL notation to RGB notation.
    pub fn hsl_to_rgb(from: [Component; 3]) -> [Component; 3] {
        let [hue, saturation, lightness] = from;

        if saturation == 0.0 {
            return [lightness, lightness, lightness];
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        [
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        ]
    }

    /// Convert from RGB notation to CMYK notation.
    pub fn rgb_to_cmyk(from: [Component; 3]) -> [Component; 4] {
        let [red, green, blue] = from;

        let max = red.max(green).max(blue);
        let key = 1.0 - max;

        if max == 0.0 {
            return [0.0, 0.0, 0.0, key];
        }

        [
            (max - red) / max,
            (max - green) / max,
            (max - blue) / max,
            key,
        ]
    }

    /// Convert from CMYK notation to RGB notation.
    pub fn cmyk_to_rgb(from: [Component; 4]) -> [Component; 3] {
        let [cyan, magenta, yellow, key] = from;

        let max = 1.0 - key;

        [
            max * (1.0 - cyan),
            max * (1.0 - magenta),
            max * (1.0 - yellow),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::Component;

    #[test]
    fn test_rgb_to_hsl() {
        #[rustfmt::skip]
        const TESTS: &[(Component, Component, Component, Component, Component, Component)] = &[
            (1.0, 0.0, 0.0, 0.0,       1.0,  0.5),
            (0.0, 1.0, 0.0, 1.0 / 3.0, 1.0,  0.5),
            (0.0, 0.0, 1.0, 2.0 / 3.0, 1.0,  0.5),
            (1.0, 1.0, 0.0, 1.0 / 6.0, 1.0,  0.5),
            (1.0, 0.0, 1.0, 5.0 / 6.0, 1.0,  0.5),
            (0.5, 0.0, 0.0, 0.0,       1.0,  0.25),
            (0.46, 0.52, 0.28, 0.208333333, 0.3, 0.4),
            (1.0, 0.75, 0.75, 0.0,     1.0,  0.875),
        ];

        for &(red, green, blue, hue, saturation, lightness) in TESTS {
            let hsl = Rgba::opaque(red, green, blue).to_hsl();
            assert_component_eq!(hsl.hue, hue);
            assert_component_eq!(hsl.saturation, saturation);
            assert_component_eq!(hsl.lightness, lightness);
        }
    }

    #[test]
    fn test_hsl_to_rgb() {
        #[rustfmt::skip]
        const TESTS: &[(Component, Component, Component, Component, Component, Component)] = &[
            (0.0,       1.0, 0.5,  1.0, 0.0, 0.0),
            (1.0 / 3.0, 1.0, 0.5,  0.0, 1.0, 0.0),
            (2.0 / 3.0, 1.0, 0.5,  0.0, 0.0, 1.0),
            (0.5,       1.0, 0.25, 0.0, 0.5, 0.5),
            (0.0,       0.0, 0.3,  0.3, 0.3, 0.3),
            (0.7,       0.0, 0.3,  0.3, 0.3, 0.3),
            (1.0,       1.0, 0.5,  1.0, 0.0, 0.0),
        ];

        for &(hue, saturation, lightness, red, green, blue) in TESTS {
            let rgba = Hsl::new(hue, saturation, lightness).to_rgba(1.0);
            assert_component_eq!(rgba.red, red);
            assert_component_eq!(rgba.green, green);
            assert_component_eq!(rgba.blue, blue);
        }
    }

    #[test]
    fn ties_resolve_towards_red() {
        // max == red == green takes the red branch: (g - b) / d = 1.
        let hsl = Rgba::opaque(1.0, 1.0, 0.0).to_hsl();
        assert_component_eq!(hsl.hue, 1.0 / 6.0);
    }

    #[test]
    fn hue_wraps_when_green_is_below_blue() {
        let hsl = Rgba::opaque(1.0, 0.0, 0.5).to_hsl();
        assert!(hsl.hue > 0.5 && hsl.hue < 1.0);
        assert_component_eq!(hsl.hue, 11.0 / 12.0);
    }

    #[test]
    fn hue_stays_below_one() {
        let green: Component = 0.3;
        let blue = Component::from_bits(green.to_bits() + 1);
        let hsl = Rgba::opaque(1.0, green, blue).to_hsl();
        assert!(hsl.hue >= 0.0 && hsl.hue < 1.0, "hue = {}", hsl.hue);
        assert_component_eq!(hsl.hue, 0.0);
    }

    #[test]
    fn achromatic_colors_have_powerless_hue_and_saturation() {
        for value in [0.0, 0.25, 0.5, 1.0] {
            let rgba = Rgba::opaque(value, value, value);
            let hsl = rgba.to_hsl();
            assert_eq!(hsl.hue, 0.0);
            assert_eq!(hsl.saturation, 0.0);
            assert_eq!(hsl.lightness, value);
            assert!(rgba
                .degeneracies()
                .contains(Flags::HUE_IS_POWERLESS | Flags::SATURATION_IS_POWERLESS));
        }
    }

    #[test]
    fn black_has_powerless_cmy() {
        let rgba = Rgba::opaque(0.0, 0.0, 0.0);
        let cmyk = rgba.to_cmyk();
        assert_eq!(cmyk, Cmyk::new(0.0, 0.0, 0.0, 1.0));
        assert!(rgba.degeneracies().contains(Flags::CMY_IS_POWERLESS));
        assert!(!Rgba::opaque(0.1, 0.0, 0.0)
            .degeneracies()
            .contains(Flags::CMY_IS_POWERLESS));
    }

    #[test]
    fn test_rgb_to_cmyk() {
        let cmyk = Rgba::opaque(1.0, 0.0, 0.0).to_cmyk();
        assert_eq!(cmyk, Cmyk::new(0.0, 1.0, 1.0, 0.0));

        let cmyk = Rgba::opaque(1.0, 1.0, 1.0).to_cmyk();
        assert_eq!(cmyk, Cmyk::new(0.0, 0.0, 0.0, 0.0));

        let cmyk = Rgba::opaque(0.5, 0.25, 0.0).to_cmyk();
        assert_component_eq!(cmyk.cyan, 0.0);
        assert_component_eq!(cmyk.magenta, 0.5);
        assert_component_eq!(cmyk.yellow, 1.0);
        assert_component_eq!(cmyk.key, 0.5);
    }

    #[test]
    fn conversions_keep_the_given_alpha() {
        assert_eq!(Hsl::new(0.3, 0.5, 0.5).to_rgba(0.25).alpha, 0.25);
        assert_eq!(Cmyk::new(0.1, 0.2, 0.3, 0.4).to_rgba(0.75).alpha, 0.75);
    }

    #[test]
    fn hsl_round_trip() {
        let steps = [0.05, 0.2, 0.35, 0.5, 0.65, 0.8, 0.95];
        for red in steps {
            for green in steps {
                for blue in [0.1, 0.6, 0.9] {
                    let rgba = Rgba::opaque(red, green, blue);
                    if rgba.degeneracies().contains(Flags::HUE_IS_POWERLESS) {
                        continue;
                    }
                    let back = rgba.to_hsl().to_rgba(rgba.alpha);
                    assert_component_eq!(back.red, red);
                    assert_component_eq!(back.green, green);
                    assert_component_eq!(back.blue, blue);
                }
            }
        }
    }

    #[test]
    fn cmyk_round_trip() {
        let steps = [0.0, 0.15, 0.4, 0.7, 1.0];
        for red in steps {
            for green in steps {
                for blue in steps {
                    let rgba = Rgba::opaque(red, green, blue);
                    if rgba.degeneracies().contains(Flags::CMY_IS_POWERLESS) {
                        continue;
                    }
                    let back = rgba.to_cmyk().to_rgba(rgba.alpha);
                    assert_component_eq!(back.red, red);
                    assert_component_eq!(back.green, green);
                    assert_component_eq!(back.blue, blue);
                }
            }
        }
    }

    #[test]
    fn hsl_survives_a_trip_through_rgba() {
        for hue in [0.0, 0.1, 0.3, 0.5, 0.7, 0.9] {
            for saturation in [0.25, 0.5, 0.75, 1.0] {
                for lightness in [0.2, 0.5, 0.8] {
                    let hsl = Hsl::new(hue, saturation, lightness);
                    let back = hsl.to_rgba(1.0).to_hsl();
                    assert_component_eq!(back.hue, hue);
                    assert_component_eq!(back.saturation, saturation);
                    assert_component_eq!(back.lightness, lightness);
                }
            }
        }
    }

    #[test]
    fn cmyk_survives_a_trip_through_rgba() {
        let steps = [0.0, 0.25, 0.6, 1.0];
        for a in steps {
            for b in steps {
                for key in [0.0, 0.3, 0.6, 0.9] {
                    // At least one of cyan, magenta and yellow is 0.
                    for [cyan, magenta, yellow] in [[0.0, a, b], [a, 0.0, b], [a, b, 0.0]] {
                        let cmyk = Cmyk::new(cyan, magenta, yellow, key);
                        let back = cmyk.to_rgba(1.0).to_cmyk();
                        assert_component_eq!(back.cyan, cyan);
                        assert_component_eq!(back.magenta, magenta);
                        assert_component_eq!(back.yellow, yellow);
                        assert_component_eq!(back.key, key);
                    }
                }
            }
        }
    }
}
