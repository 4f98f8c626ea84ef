//! Short, compact and long renderings of a duration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::unit::UnitKind;
use super::value::Duration;
use crate::domain::error::InvalidStyleError;

/// Textual presentation of a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// "1d2h3m4s"
    Short,
    /// "1d 2h 3m 4s"
    #[default]
    Compact,
    /// "1 day, 2 hours, 3 minutes and 4 seconds"
    Long,
}

impl FormatStyle {
    pub const ALL: [FormatStyle; 3] = [FormatStyle::Short, FormatStyle::Compact, FormatStyle::Long];

    /// Lowercase style name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Compact => "compact",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatStyle {
    type Err = InvalidStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidStyleError {
                input: s.to_string(),
            })
    }
}

impl Duration {
    /// Render without separators, e.g. "1d2h3m4s". Zero renders as "0s".
    pub fn to_short_string(&self) -> String {
        self.abbreviated("")
    }

    /// Render with a space between parts, e.g. "1d 2h 3m 4s". Zero renders as "0s".
    pub fn to_compact_string(&self) -> String {
        self.abbreviated(" ")
    }

    /// Render in words, e.g. "1 hour, 1 minute and 1 second".
    /// Zero renders as "0 seconds".
    pub fn to_long_string(&self) -> String {
        let parts: Vec<String> = self
            .components()
            .non_zero()
            .map(|(unit, value)| long_part(unit, value))
            .collect();

        match parts.split_last() {
            None => "0 seconds".to_string(),
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
        }
    }

    /// Render in the given style
    pub fn format(&self, style: FormatStyle) -> String {
        match style {
            FormatStyle::Short => self.to_short_string(),
            FormatStyle::Compact => self.to_compact_string(),
            FormatStyle::Long => self.to_long_string(),
        }
    }

    fn abbreviated(&self, separator: &str) -> String {
        if self.is_zero() {
            return format!("0{}", UnitKind::Second.letter());
        }

        self.components()
            .non_zero()
            .map(|(unit, value)| format!("{}{}", value, unit.letter()))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

fn long_part(unit: UnitKind, value: i64) -> String {
    let plural = if value == 1 { "" } else { "s" };
    format!("{} {}{}", value, unit.word(), plural)
}
