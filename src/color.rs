//! The building blocks shared by every representation of a color.

use bitflags::bitflags;
use std::ops::Deref;

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all channels are stored as.
pub type Component = f32;

/// The most channels any representation has.
const MAX_CHANNELS: usize = 4;

/// The channels of a single representation, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channels {
    values: [Component; MAX_CHANNELS],
    len: usize,
}

impl Channels {
    /// Create channels from a slice. Anything past the fourth value is
    /// ignored.
    pub fn from_slice(values: &[Component]) -> Self {
        let len = values.len().min(MAX_CHANNELS);
        let mut channels = [0.0; MAX_CHANNELS];
        channels[..len].copy_from_slice(&values[..len]);
        Self {
            values: channels,
            len,
        }
    }

    /// Return the channels as a slice.
    pub fn as_slice(&self) -> &[Component] {
        &self.values[..self.len]
    }
}

impl Deref for Channels {
    type Target = [Component];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

bitflags! {
    /// Marks derived channels that hold a conventional value because the
    /// formula producing them divided by zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// The color is achromatic, hue was set to 0.
        const HUE_IS_POWERLESS = 1 << 0;
        /// The color is achromatic, saturation was set to 0.
        const SATURATION_IS_POWERLESS = 1 << 1;
        /// The color is black, cyan, magenta and yellow were set to 0.
        const CMY_IS_POWERLESS = 1 << 2;
    }
}

/// The representations a color is presented in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Representation {
    /// Red, green, blue and alpha. Every conversion pivots through this
    /// representation.
    Rgba = 0,
    /// Hue, saturation and lightness.
    Hsl = 1,
    /// Cyan, magenta, yellow and key (black).
    Cmyk = 2,
}

impl Representation {
    /// All representations in display order.
    pub const ALL: [Representation; 3] = [Self::Rgba, Self::Hsl, Self::Cmyk];

    /// The number of channels the representation has.
    pub fn channel_count(&self) -> usize {
        match self {
            Self::Rgba | Self::Cmyk => 4,
            Self::Hsl => 3,
        }
    }

    /// Short upper-case name used when displaying the representation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rgba => "RGBA",
            Self::Hsl => "HSL",
            Self::Cmyk => "CMYK",
        }
    }

    /// Whether the channel at `index` is circular (wraps around at 1.0).
    pub fn is_circular(&self, index: usize) -> bool {
        matches!((self, index), (Self::Hsl, 0))
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Implemented by models to name the representation they hold.
pub trait HasRepresentation {
    /// The representation of the model.
    const REPRESENTATION: Representation;
}
