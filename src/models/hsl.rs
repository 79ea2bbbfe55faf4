//! Model a color with the HSL notation.

use crate::color::{Component, HasRepresentation, Representation};

colorslide_macros::gen_model! {
    /// A color specified with the HSL notation. The hue is a fraction of a
    /// full turn in [0, 1).
    pub struct Hsl {
        /// The hue channel of the color.
        pub hue: Component,
        /// The saturation channel of the color.
        saturation: Component,
        /// The lightness channel of the color.
        lightness: Component,
    }
}

impl HasRepresentation for Hsl {
    const REPRESENTATION: Representation = Representation::Hsl;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;

    #[test]
    fn channels_follow_declaration_order() {
        let mut hsl = Hsl::new(0.1, 0.2, 0.3);
        assert_eq!(hsl.to_channels().as_slice(), &[0.1, 0.2, 0.3]);

        *hsl.channel_mut(2).unwrap() = 0.9;
        assert_eq!(hsl.lightness, 0.9);
        assert!(hsl.channel_mut(3).is_none());
    }
}
