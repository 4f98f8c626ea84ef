//! Conversion use case
//!
//! Turns user input (duration text or a count of seconds) into a
//! [`Duration`] and collects every rendering of it into a report.

use serde::Serialize;

use crate::domain::duration::Duration;
use crate::domain::error::DurationError;

/// What the caller wants converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertRequest {
    /// Human-readable text such as "2h 30m"
    Text(String),
    /// Total number of seconds
    Seconds(i64),
}

/// Every rendering of a duration plus its total seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationReport {
    pub seconds: i64,
    pub short: String,
    pub compact: String,
    pub long: String,
}

impl From<Duration> for DurationReport {
    fn from(duration: Duration) -> Self {
        Self {
            seconds: duration.as_secs(),
            short: duration.to_short_string(),
            compact: duration.to_compact_string(),
            long: duration.to_long_string(),
        }
    }
}

/// Build a validated duration from a request
pub fn convert(request: &ConvertRequest) -> Result<Duration, DurationError> {
    match request {
        ConvertRequest::Text(text) => Duration::parse(text),
        ConvertRequest::Seconds(seconds) => Duration::from_secs(*seconds),
    }
}
