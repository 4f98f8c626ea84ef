//! Domain layer - Core business logic
//!
//! Contains the duration value object with its parser and formatters,
//! and domain errors.
//! This layer has no dependencies on external systems.

pub mod duration;
pub mod error;

// Re-export common types
pub use duration::{parse, Components, Duration, FormatStyle, UnitKind};
pub use error::*;
