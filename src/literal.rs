//! Build the starting color, either from a hex literal or at random.

use crate::{
    error::{Error, Result},
    models::Rgba,
    Component,
};

impl Rgba {
    /// Parse a color literal of the form `RRGGBB` or `RRGGBBAA`. A leading
    /// `#` is accepted. Six digit literals are fully opaque.
    pub fn from_hex(literal: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidLiteral {
            literal: literal.to_string(),
            reason,
        };

        let digits = literal.strip_prefix('#').unwrap_or(literal);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("expected only hexadecimal digits"));
        }
        if digits.len() != 6 && digits.len() != 8 {
            return Err(invalid("expected 6 or 8 digits"));
        }

        // All digits are ASCII, so slicing at even offsets is safe.
        let channel = |i: usize| -> Result<Component> {
            u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map(|v| v as Component / 255.0)
                .map_err(|_| invalid("expected only hexadecimal digits"))
        };

        let alpha = if digits.len() == 8 { channel(3)? } else { 1.0 };

        Ok(Self::new(channel(0)?, channel(1)?, channel(2)?, alpha))
    }

    /// Generate a random, fully opaque color. Each channel is one of the
    /// 8-bit values 0 through 254.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        let mut channel = || rng.u8(0..255) as Component / 255.0;
        let red = channel();
        let green = channel();
        let blue = channel();
        Self::opaque(red, green, blue)
    }
}

impl std::str::FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digits_are_opaque() {
        let rgba = Rgba::from_hex("FF8000").unwrap();
        assert_eq!(rgba.red, 1.0);
        assert_eq!(rgba.green, 128.0 / 255.0);
        assert_eq!(rgba.blue, 0.0);
        assert_eq!(rgba.alpha, 1.0);
    }

    #[test]
    fn eight_digits_carry_alpha() {
        let rgba: Rgba = "#00000080".parse().unwrap();
        assert_eq!(rgba.red, 0.0);
        assert_eq!(rgba.alpha, 128.0 / 255.0);
    }

    #[test]
    fn lower_case_digits() {
        assert_eq!(
            Rgba::from_hex("ff00ff").unwrap(),
            Rgba::opaque(1.0, 0.0, 1.0)
        );
    }

    #[test]
    fn rejects_bad_literals() {
        let literals = [
            "", "FFF", "FFFFF", "FFFFFFF", "FFFFFFFFF", "GG0000", "+FFFFF", "##FFFFFF", "FF 000",
        ];
        for literal in literals {
            let err = Rgba::from_hex(literal).unwrap_err();
            assert!(
                matches!(err, Error::InvalidLiteral { literal: ref l, .. } if l == literal),
                "{literal:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn random_colors_are_opaque_and_in_range() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..100 {
            let rgba = Rgba::random(&mut rng);
            assert_eq!(rgba.alpha, 1.0);
            for channel in [rgba.red, rgba.green, rgba.blue] {
                assert!((0.0..=254.0 / 255.0).contains(&channel));
            }
        }
    }

    #[test]
    fn random_colors_follow_the_seed() {
        let a = Rgba::random(&mut fastrand::Rng::with_seed(42));
        let b = Rgba::random(&mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);
    }
}
