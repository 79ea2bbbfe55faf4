//! Models are structs that hold a color in one of the supported
//! representations. Each channel is a named field, while [`Model`] gives
//! positional access for the edit protocol.

use crate::color::{Channels, Component, HasRepresentation};

mod cmyk;
mod hsl;
mod rgba;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use rgba::Rgba;

/// Positional access to the channels of a model.
pub trait Model: HasRepresentation + Copy {
    /// Return all channels of the model in declaration order.
    fn to_channels(&self) -> Channels;

    /// Return a mutable reference to the channel at `index`, or `None` if the
    /// model has no such channel.
    fn channel_mut(&mut self, index: usize) -> Option<&mut Component>;
}
