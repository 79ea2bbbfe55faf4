//! [`ColorState`] owns the color being edited and keeps its three
//! representations consistent.
//!
//! RGBA is the authoritative value. Editing a channel of HSL or CMYK makes
//! that representation authoritative for the duration of the edit: the new
//! RGBA value is derived from it, and the remaining representation is derived
//! from the new RGBA. The edited representation keeps the values as written,
//! so a slider never jumps away from where it was put.

use tracing::{debug, trace};

use crate::{
    color::{Channels, Component, Flags, Representation},
    error::{Error, Result},
    math::{normalize, normalize_circular},
    models::{Cmyk, Hsl, Model, Rgba},
};

/// A request to change one channel of one representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edit {
    /// The representation being edited.
    pub representation: Representation,
    /// Index of the channel within the representation.
    pub channel: usize,
    /// The new value as a fraction of the channel's range. Values outside
    /// [0, 1] are clamped, except for hue which wraps around.
    pub value: Component,
}

impl Edit {
    /// Create a new edit.
    pub fn new(representation: Representation, channel: usize, value: Component) -> Self {
        Self {
            representation,
            channel,
            value,
        }
    }
}

/// The channels of all three representations, taken at the same instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Views {
    /// The RGBA channels.
    pub rgba: Channels,
    /// The HSL channels.
    pub hsl: Channels,
    /// The CMYK channels.
    pub cmyk: Channels,
}

impl Views {
    /// Return the channels of the given representation.
    pub fn get(&self, representation: Representation) -> &Channels {
        match representation {
            Representation::Rgba => &self.rgba,
            Representation::Hsl => &self.hsl,
            Representation::Cmyk => &self.cmyk,
        }
    }
}

/// The color being edited, in every representation.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorState {
    rgba: Rgba,
    hsl: Hsl,
    cmyk: Cmyk,
}

impl ColorState {
    /// Create the state for a color, deriving HSL and CMYK from it.
    pub fn new(rgba: Rgba) -> Self {
        let rgba = Rgba::new(
            normalize(rgba.red),
            normalize(rgba.green),
            normalize(rgba.blue),
            normalize(rgba.alpha),
        );

        Self {
            rgba,
            hsl: rgba.to_hsl(),
            cmyk: rgba.to_cmyk(),
        }
    }

    /// The color in RGBA.
    pub fn rgba(&self) -> &Rgba {
        &self.rgba
    }

    /// The color in HSL.
    pub fn hsl(&self) -> &Hsl {
        &self.hsl
    }

    /// The color in CMYK.
    pub fn cmyk(&self) -> &Cmyk {
        &self.cmyk
    }

    /// Which derived channels are powerless for the current color.
    pub fn flags(&self) -> Flags {
        self.rgba.degeneracies()
    }

    /// Return the channels of the given representation.
    pub fn get(&self, representation: Representation) -> Channels {
        match representation {
            Representation::Rgba => self.rgba.to_channels(),
            Representation::Hsl => self.hsl.to_channels(),
            Representation::Cmyk => self.cmyk.to_channels(),
        }
    }

    /// Return the channels of all representations.
    pub fn views(&self) -> Views {
        Views {
            rgba: self.rgba.to_channels(),
            hsl: self.hsl.to_channels(),
            cmyk: self.cmyk.to_channels(),
        }
    }

    /// Set channel `index` of `representation` to `value` and bring the other
    /// representations up to date.
    pub fn set_channel(
        &mut self,
        representation: Representation,
        index: usize,
        value: Component,
    ) -> Result<Views> {
        self.apply_edit(Edit::new(representation, index, value))
    }

    /// Apply a single edit and return the refreshed channels of every
    /// representation. On error the state is left unchanged.
    pub fn apply_edit(&mut self, edit: Edit) -> Result<Views> {
        let Edit {
            representation,
            channel,
            value,
        } = edit;

        let value = if representation.is_circular(channel) {
            normalize_circular(value)
        } else {
            normalize(value)
        };

        match representation {
            Representation::Rgba => {
                write_channel(&mut self.rgba, channel, value)?;
                self.hsl = self.rgba.to_hsl();
                self.cmyk = self.rgba.to_cmyk();
            }
            Representation::Hsl => {
                write_channel(&mut self.hsl, channel, value)?;
                self.rgba = self.hsl.to_rgba(self.rgba.alpha);
                self.cmyk = self.rgba.to_cmyk();
            }
            Representation::Cmyk => {
                write_channel(&mut self.cmyk, channel, value)?;
                self.rgba = self.cmyk.to_rgba(self.rgba.alpha);
                self.hsl = self.rgba.to_hsl();
            }
        }

        debug!(%representation, channel, value, "applied edit");
        trace!(rgba = ?self.rgba, hsl = ?self.hsl, cmyk = ?self.cmyk, "recomputed views");

        Ok(self.views())
    }
}

fn write_channel<M: Model>(model: &mut M, index: usize, value: Component) -> Result<()> {
    let channel = model
        .channel_mut(index)
        .ok_or(Error::ChannelOutOfRange {
            representation: M::REPRESENTATION,
            index,
        })?;
    *channel = value;
    Ok(())
}
