//! Unit kinds and their accepted spellings

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// One of the four units a duration is broken into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitKind {
    Day,
    Hour,
    Minute,
    Second,
}

/// Spellings ordered longest first, so a longer spelling always wins over
/// one of its prefixes ("mins" over "m", "hours" over "h").
const SPELLINGS: &[(&str, UnitKind)] = &[
    ("minutes", UnitKind::Minute),
    ("seconds", UnitKind::Second),
    ("minute", UnitKind::Minute),
    ("second", UnitKind::Second),
    ("hours", UnitKind::Hour),
    ("hour", UnitKind::Hour),
    ("days", UnitKind::Day),
    ("mins", UnitKind::Minute),
    ("secs", UnitKind::Second),
    ("day", UnitKind::Day),
    ("hrs", UnitKind::Hour),
    ("min", UnitKind::Minute),
    ("sec", UnitKind::Second),
    ("hr", UnitKind::Hour),
    ("d", UnitKind::Day),
    ("h", UnitKind::Hour),
    ("m", UnitKind::Minute),
    ("s", UnitKind::Second),
];

impl UnitKind {
    /// All kinds, largest first
    pub const ALL: [UnitKind; 4] = [
        UnitKind::Day,
        UnitKind::Hour,
        UnitKind::Minute,
        UnitKind::Second,
    ];

    /// Length of one unit in seconds
    pub const fn seconds(self) -> i64 {
        match self {
            Self::Day => SECONDS_PER_DAY,
            Self::Hour => SECONDS_PER_HOUR,
            Self::Minute => SECONDS_PER_MINUTE,
            Self::Second => 1,
        }
    }

    /// Singular English word, e.g. "hour"
    pub const fn word(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }

    /// Single-letter abbreviation used by the short and compact forms
    pub const fn letter(self) -> char {
        match self {
            Self::Day => 'd',
            Self::Hour => 'h',
            Self::Minute => 'm',
            Self::Second => 's',
        }
    }

    /// Position in `ALL`, used to index per-unit totals
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Day => 0,
            Self::Hour => 1,
            Self::Minute => 2,
            Self::Second => 3,
        }
    }

    /// Match a unit spelling at the start of `text`, ignoring ASCII case.
    ///
    /// Returns the kind and the byte length of the matched spelling.
    pub fn match_prefix(text: &str) -> Option<(UnitKind, usize)> {
        let bytes = text.as_bytes();
        SPELLINGS.iter().find_map(|(spelling, kind)| {
            let len = spelling.len();
            (bytes.len() >= len && bytes[..len].eq_ignore_ascii_case(spelling.as_bytes()))
                .then_some((*kind, len))
        })
    }
}
