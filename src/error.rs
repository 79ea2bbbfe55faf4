//! Errors reported by the color model.

use crate::color::Representation;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building or editing a color.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A color literal could not be parsed.
    #[error("invalid color literal {literal:?}: {reason}")]
    InvalidLiteral {
        /// The literal as it was given.
        literal: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// An edit addressed a channel the representation does not have.
    #[error("{representation} has no channel {index}")]
    ChannelOutOfRange {
        /// The representation that was edited.
        representation: Representation,
        /// The requested channel index.
        index: usize,
    },
}
