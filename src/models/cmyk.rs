//! Model a color with the subtractive CMYK notation.

use crate::color::{Component, HasRepresentation, Representation};

colorslide_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black) inks.
    pub struct Cmyk {
        /// The cyan channel of the color.
        pub cyan: Component,
        /// The magenta channel of the color.
        pub magenta: Component,
        /// The yellow channel of the color.
        pub yellow: Component,
        /// The key (black) channel of the color.
        pub key: Component,
    }
}

impl HasRepresentation for Cmyk {
    const REPRESENTATION: Representation = Representation::Cmyk;
}
