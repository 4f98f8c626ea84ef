//! Duration value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::parser;
use super::unit::{UnitKind, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::domain::error::DurationError;

/// Value object representing a non-negative span of whole seconds.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    seconds: i64,
}

/// Day / hour / minute / second breakdown of a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Components {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Components {
    /// Value for a single unit
    pub const fn get(&self, unit: UnitKind) -> i64 {
        match unit {
            UnitKind::Day => self.days,
            UnitKind::Hour => self.hours,
            UnitKind::Minute => self.minutes,
            UnitKind::Second => self.seconds,
        }
    }

    /// Units with a non-zero value, largest first
    pub fn non_zero(&self) -> impl Iterator<Item = (UnitKind, i64)> + '_ {
        UnitKind::ALL
            .into_iter()
            .map(move |unit| (unit, self.get(unit)))
            .filter(|(_, value)| *value != 0)
    }
}

impl Duration {
    /// The zero-length duration
    pub const ZERO: Duration = Duration { seconds: 0 };

    /// Largest representable duration
    pub const MAX: Duration = Duration { seconds: i64::MAX };

    /// Create a Duration from a total number of seconds
    pub fn from_secs(seconds: i64) -> Result<Self, DurationError> {
        if seconds < 0 {
            return Err(DurationError::invalid(format!(
                "duration can not be negative: {}s",
                seconds
            )));
        }
        Ok(Self { seconds })
    }

    /// Create a Duration from a day / hour / minute / second breakdown.
    ///
    /// Parts need not be in their natural ranges ("90 minutes" is fine), but
    /// none may be negative and the total must fit in `i64` seconds.
    pub fn from_components(
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Result<Self, DurationError> {
        let parts = [days, hours, minutes, seconds];
        if parts.iter().any(|part| *part < 0) {
            return Err(DurationError::invalid("duration can not be negative"));
        }
        Self::from_secs(total_seconds(parts)?)
    }

    /// Parse a human-readable duration string such as "1d 2h 30m"
    pub fn parse(input: &str) -> Result<Self, DurationError> {
        parser::parse(input)
    }

    /// Get duration in seconds
    pub const fn as_secs(&self) -> i64 {
        self.seconds
    }

    /// Whether this is the zero duration
    pub const fn is_zero(&self) -> bool {
        self.seconds == 0
    }

    /// Break the duration into days, hours, minutes and seconds
    pub const fn components(&self) -> Components {
        let total = self.seconds;
        Components {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_secs(self.seconds.unsigned_abs())
    }
}

/// Combine per-unit totals (days, hours, minutes, seconds) into seconds,
/// checking every multiplication and addition.
pub(crate) fn total_seconds(parts: [i64; 4]) -> Result<i64, DurationError> {
    UnitKind::ALL
        .into_iter()
        .zip(parts)
        .try_fold(0_i64, |acc, (unit, value)| {
            value
                .checked_mul(unit.seconds())
                .and_then(|secs| acc.checked_add(secs))
                .ok_or(DurationError::Overflow)
        })
}

impl FromStr for Duration {
    type Err = DurationError;

    /// Parse a duration string into a Duration value object.
    /// Supported formats: "30s", "2h 30m", "1d5h15m", "45 minutes"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

/// Renders the compact form, which always parses back to the same value.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact_string())
    }
}

impl From<Duration> for StdDuration {
    fn from(duration: Duration) -> Self {
        duration.as_std()
    }
}

/// Sub-second precision is dropped.
impl TryFrom<StdDuration> for Duration {
    type Error = DurationError;

    fn try_from(value: StdDuration) -> Result<Self, Self::Error> {
        let seconds = i64::try_from(value.as_secs()).map_err(|_| DurationError::Overflow)?;
        Ok(Self { seconds })
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_compact_string())
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DurationVisitor)
    }
}

struct DurationVisitor;

impl<'de> Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a duration string like \"1h 30m\" or a number of seconds")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Duration, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Duration, E> {
        Duration::from_secs(value).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Duration, E> {
        let seconds = i64::try_from(value).map_err(|_| E::custom(DurationError::Overflow))?;
        Duration::from_secs(seconds).map_err(E::custom)
    }
}
