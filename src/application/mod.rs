//! Application layer - Use cases
//!
//! Contains the conversion use case shared by the command-line front end.

pub mod convert;

// Re-export use cases
pub use convert::{convert, ConvertRequest, DurationReport};
