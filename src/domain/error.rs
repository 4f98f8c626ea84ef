//! Domain error types

use thiserror::Error;

/// Error when parsing or constructing a duration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// Input is blank, malformed, or describes a negative duration.
    #[error("{message}")]
    InvalidFormat {
        message: String,
        /// Byte offset of the first offending character, when there is one.
        position: Option<usize>,
    },

    /// The duration does not fit in a signed 64-bit count of seconds.
    #[error("Duration is too large")]
    Overflow,
}

impl DurationError {
    /// Build an `InvalidFormat` error without a position
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            position: None,
        }
    }

    /// Build an `InvalidFormat` error pointing at a byte offset
    pub fn invalid_at(message: impl Into<String>, position: usize) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            position: Some(position),
        }
    }

    /// Byte offset of the offending character, if the error has one
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidFormat { position, .. } => *position,
            Self::Overflow => None,
        }
    }
}

/// Error when an unknown format style name is given
#[derive(Debug, Clone, Error)]
#[error("Invalid style: \"{input}\". Valid styles are: short, compact, long")]
pub struct InvalidStyleError {
    pub input: String,
}
