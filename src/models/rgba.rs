//! Model a color with red, green, blue and alpha channels.

use crate::color::{Component, HasRepresentation, Representation};

colorslide_macros::gen_model! {
    /// A color specified with straight (not premultiplied) red, green, blue
    /// and alpha channels in [0, 1].
    pub struct Rgba {
        /// The red channel of the color.
        pub red: Component,
        /// The green channel of the color.
        pub green: Component,
        /// The blue channel of the color.
        pub blue: Component,
        /// The alpha (opacity) channel of the color.
        pub alpha: Component,
    }
}

impl HasRepresentation for Rgba {
    const REPRESENTATION: Representation = Representation::Rgba;
}

impl Rgba {
    /// Create a fully opaque color.
    pub fn opaque(red: Component, green: Component, blue: Component) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Return the color channels multiplied by alpha, as they appear
    /// composited over black.
    pub fn premultiplied(&self) -> [Component; 3] {
        [
            self.red * self.alpha,
            self.green * self.alpha,
            self.blue * self.alpha,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;

    #[test]
    fn basic_rgba_colors() {
        let rgba = Rgba::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(rgba.red, 0.1);
        assert_eq!(rgba.green, 0.2);
        assert_eq!(rgba.blue, 0.3);
        assert_eq!(rgba.alpha, 0.4);
        assert_eq!(rgba.to_channels().as_slice(), &[0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Rgba::opaque(0.1, 0.2, 0.3).alpha, 1.0);
    }

    #[test]
    fn premultiplied_scales_by_alpha() {
        let rgba = Rgba::new(1.0, 0.5, 0.0, 0.5);
        assert_eq!(rgba.premultiplied(), [0.5, 0.25, 0.0]);
    }
}
