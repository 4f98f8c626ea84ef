//! Tokenizing parser for human-readable duration strings
//!
//! Input is a sequence of tokens separated by optional whitespace. A token is
//! an optionally signed integer, optional whitespace, and a unit spelling:
//!
//! ```text
//! "1d 2h 30m"   "45 minutes"   "1d5h15m"   "2 hours 30 mins"
//! ```
//!
//! Tokens of the same unit are summed, so token order does not matter and
//! repeated units aggregate ("1h 30m 30m" is two hours).

use super::unit::UnitKind;
use super::value::{total_seconds, Duration};
use crate::domain::error::DurationError;

/// A recognized `(magnitude, unit)` pair and the byte range it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token {
    value: i64,
    unit: UnitKind,
    start: usize,
    end: usize,
}

/// Parse a duration string such as "2h 30m" into a [`Duration`].
pub fn parse(input: &str) -> Result<Duration, DurationError> {
    if input.trim().is_empty() {
        return Err(DurationError::invalid("input must not be empty or blank"));
    }

    let mut totals = [0_i64; 4];
    let mut matched = 0;
    let mut scanner = Scanner::new(input);

    while let Some(token) = scanner.next_token()? {
        if token.value < 0 {
            return Err(DurationError::invalid_at(
                format!(
                    "duration must not be negative: \"{}\"",
                    &input[token.start..token.end]
                ),
                token.start,
            ));
        }

        let total = &mut totals[token.unit.index()];
        *total = total
            .checked_add(token.value)
            .ok_or(DurationError::Overflow)?;
        matched += 1;
    }

    if matched == 0 {
        return Err(DurationError::invalid(format!(
            "Invalid duration format: \"{}\"",
            input
        )));
    }

    Duration::from_secs(total_seconds(totals)?)
}

/// Left-to-right cursor over the input
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Read the next token, or `None` once only whitespace remains.
    fn next_token(&mut self) -> Result<Option<Token>, DurationError> {
        self.skip_whitespace();
        if self.pos == self.input.len() {
            return Ok(None);
        }

        let start = self.pos;
        let negative = match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(b'+') => {
                self.pos += 1;
                false
            }
            _ => false,
        };

        let digits_start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == digits_start {
            return Err(self.unexpected());
        }
        let number = &self.input[start..self.pos];

        self.skip_whitespace();
        let Some((unit, len)) = UnitKind::match_prefix(self.rest()) else {
            return Err(self.missing_unit(number));
        };
        self.pos += len;

        let value = number.parse::<i64>().map_err(|_| {
            if negative {
                DurationError::invalid_at(
                    format!("duration must not be negative: \"{}\"", number),
                    start,
                )
            } else {
                DurationError::Overflow
            }
        })?;

        Ok(Some(Token {
            value,
            unit,
            start,
            end: self.pos,
        }))
    }

    fn unexpected(&self) -> DurationError {
        DurationError::invalid_at(
            format!(
                "Invalid duration format near position {}: \"{}\"",
                self.pos, self.input
            ),
            self.pos,
        )
    }

    fn missing_unit(&self, number: &str) -> DurationError {
        let message = match self.rest().split_whitespace().next() {
            Some(word) => format!(
                "Unrecognized unit \"{}\" after \"{}\" at position {}",
                word, number, self.pos
            ),
            None => format!("Missing unit after \"{}\" at position {}", number, self.pos),
        };
        DurationError::invalid_at(message, self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(input: &str) -> i64 {
        parse(input).unwrap().as_secs()
    }

    fn tokens(input: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(input);
        let mut out = Vec::new();
        while let Some(token) = scanner.next_token().unwrap() {
            out.push(token);
        }
        out
    }

    #[test]
    fn parses_simple_mixed() {
        assert_eq!(secs("2h 30m"), 9_000);
    }

    #[test]
    fn parses_without_spaces() {
        assert_eq!(secs("1d5h15m"), 86_400 + 5 * 3_600 + 15 * 60);
    }

    #[test]
    fn parses_long_unit_words() {
        assert_eq!(secs("45 minutes"), 2_700);
        assert_eq!(secs("2 hours 30 minutes"), 9_000);
        assert_eq!(secs("1 day 1 hour 1 minute 1 second"), 90_061);
    }

    #[test]
    fn parses_abbreviations() {
        assert_eq!(secs("2hrs 5mins 10secs"), 2 * 3_600 + 5 * 60 + 10);
        assert_eq!(secs("1hr 1min 1sec"), 3_661);
    }

    #[test]
    fn parses_seconds_only() {
        assert_eq!(secs("3600s"), 3_600);
        assert_eq!(secs("0s"), 0);
    }

    #[test]
    fn accepts_explicit_plus_sign() {
        assert_eq!(secs("+5m"), 300);
    }

    #[test]
    fn accepts_negative_zero() {
        assert_eq!(secs("-0m"), 0);
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(secs("  \t1h\n "), 3_600);
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(secs("15m 1d 3h"), secs("1d 3h 15m"));
    }

    #[test]
    fn aggregates_duplicate_units() {
        assert_eq!(secs("1h 30m 30m"), secs("2h"));
    }

    #[test]
    fn case_insensitive_units() {
        assert_eq!(secs("1D 2H"), secs("1d 2h"));
        assert_eq!(secs("5 MINUTES"), 300);
    }

    #[test]
    fn tokens_record_offsets() {
        let found = tokens(" 1h  30 min");
        assert_eq!(
            found,
            vec![
                Token {
                    value: 1,
                    unit: UnitKind::Hour,
                    start: 1,
                    end: 3
                },
                Token {
                    value: 30,
                    unit: UnitKind::Minute,
                    start: 5,
                    end: 11
                },
            ]
        );
    }

    #[test]
    fn rejects_negative() {
        let err = parse("-5m").unwrap_err();
        assert!(matches!(err, DurationError::InvalidFormat { .. }));
        assert!(err.to_string().to_lowercase().contains("negative"));
        assert_eq!(err.position(), Some(0));
    }

    #[test]
    fn rejects_negative_later_token() {
        let err = parse("1h -5m").unwrap_err();
        assert!(err.to_string().contains("negative"));
        assert_eq!(err.position(), Some(3));
    }

    #[test]
    fn rejects_blank() {
        for input in ["", "   ", "\t\n"] {
            let err = parse(input).unwrap_err();
            assert!(matches!(err, DurationError::InvalidFormat { .. }), "{input:?}");
            assert_eq!(err.position(), None);
        }
    }

    #[test]
    fn rejects_garbage() {
        let err = parse("abc").unwrap_err();
        assert!(matches!(err, DurationError::InvalidFormat { .. }));
        assert_eq!(err.position(), Some(0));
    }

    #[test]
    fn rejects_trailing_garbage() {
        let err = parse("1h abc").unwrap_err();
        assert!(matches!(err, DurationError::InvalidFormat { .. }));
        assert_eq!(err.position(), Some(3));
    }

    #[test]
    fn rejects_garbage_between_tokens() {
        let err = parse("1h, 30m").unwrap_err();
        assert_eq!(err.position(), Some(2));
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn rejects_number_without_unit() {
        let err = parse("30").unwrap_err();
        assert!(err.to_string().contains("Missing unit"));
        assert_eq!(err.position(), Some(2));

        let err = parse("1h 30").unwrap_err();
        assert_eq!(err.position(), Some(5));
    }

    #[test]
    fn rejects_unknown_unit() {
        let err = parse("2 weeks").unwrap_err();
        assert!(err.to_string().contains("\"weeks\""));
        assert_eq!(err.position(), Some(2));
    }

    #[test]
    fn rejects_unit_followed_by_letters() {
        // "m" matches, the stray "onths" is left over
        let err = parse("3 months").unwrap_err();
        assert_eq!(err.position(), Some(3));
    }

    #[test]
    fn rejects_double_sign() {
        let err = parse("+-5m").unwrap_err();
        assert_eq!(err.position(), Some(1));
    }

    #[test]
    fn positions_count_leading_whitespace() {
        let err = parse("   1h x").unwrap_err();
        assert_eq!(err.position(), Some(6));
    }

    #[test]
    fn reports_overflow_on_unit_sum() {
        let input = format!("{}s 1s", i64::MAX);
        assert_eq!(parse(&input).unwrap_err(), DurationError::Overflow);
    }

    #[test]
    fn reports_overflow_on_conversion() {
        let input = format!("{}d", i64::MAX / 86_400 + 1);
        assert_eq!(parse(&input).unwrap_err(), DurationError::Overflow);

        let input = format!("{}s 1d", i64::MAX - 10);
        assert_eq!(parse(&input).unwrap_err(), DurationError::Overflow);
    }

    #[test]
    fn reports_overflow_on_huge_magnitude() {
        assert_eq!(
            parse("99999999999999999999s").unwrap_err(),
            DurationError::Overflow
        );
    }

    #[test]
    fn huge_negative_magnitude_is_negative_error() {
        let err = parse("-99999999999999999999s").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn largest_representable_value_parses() {
        let input = format!("{}s", i64::MAX);
        assert_eq!(parse(&input).unwrap(), Duration::MAX);
    }
}
