//! colorslide keeps a single color in sync across its RGBA, HSL and CMYK
//! representations while any one of them is being edited.
//!
//! ```rust
//! use colorslide::{models::Rgba, ColorState, Edit, Representation, Summary};
//! let mut state = ColorState::new(Rgba::from_hex("FF0000").unwrap());
//! state.apply_edit(Edit::new(Representation::Cmyk, 3, 0.5)).unwrap();
//! assert_eq!(state.summary(Summary::Rgba), "rgba(127, 0, 0, 1.00)");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod literal;
mod math;
pub mod models;
mod state;
mod summary;
#[cfg(test)]
mod test;

pub use color::{Channels, Component, Flags, HasRepresentation, Representation};
pub use error::{Error, Result};
pub use state::{ColorState, Edit, Views};
pub use summary::Summary;
