//! duration-parser - human-readable durations to seconds and back
//!
//! Parses strings such as `"1d 2h 30m"`, `"45 minutes"` or `"1d5h15m"` into a
//! non-negative [`Duration`] of whole seconds, and renders a duration in three
//! forms:
//!
//! - **short**: `1d2h3m4s`
//! - **compact**: `1d 2h 3m 4s`
//! - **long**: `1 day, 2 hours, 3 minutes and 4 seconds`
//!
//! ```
//! use duration_parser::Duration;
//!
//! let d: Duration = "2h 30m".parse().unwrap();
//! assert_eq!(d.as_secs(), 9_000);
//! assert_eq!(d.to_long_string(), "2 hours and 30 minutes");
//! ```
//!
//! # Architecture
//!
//! The crate is layered:
//!
//! - **Domain**: Duration value object, parser, formatters, and errors
//! - **Application**: Conversion use case
//! - **CLI**: Command-line interface and argument parsing (`cli` feature)
//!
//! Without the `cli` feature the crate performs no I/O.

pub mod application;
#[cfg(feature = "cli")]
pub mod cli;
pub mod domain;

pub use domain::{parse, Components, Duration, DurationError, FormatStyle, UnitKind};
