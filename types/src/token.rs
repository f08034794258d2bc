//! Reference token value object.
//!
//! A token has the fixed shape `[Ref:CDCD/YYMMDD/HHMMSS]` where `C` is an
//! uppercase ASCII letter and `D` a decimal digit. Every constructor
//! ([`ReferenceToken::compose`], [`ReferenceToken::from_draws`], parsing)
//! enforces that shape.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::formatting::{format_date_segment, format_time_segment};

/// Number of characters in the random pattern segment.
pub const PATTERN_LEN: usize = 4;

const PREFIX: &str = "[Ref:";
const SUFFIX: &str = "]";
const SEGMENT_LEN: usize = 6;

/// Errors produced when a string does not have the token shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenParseError {
    #[error("token must be wrapped in `[Ref:` and `]`")]
    MissingDelimiters,
    #[error("token must have three `/`-separated segments")]
    WrongSegmentCount,
    #[error("invalid pattern segment {0:?}")]
    InvalidPattern(String),
    #[error("invalid date segment {0:?}")]
    InvalidDate(String),
    #[error("invalid time segment {0:?}")]
    InvalidTime(String),
}

/// Immutable, display-ready reference token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceToken(String);

impl ReferenceToken {
    /// Build a token from a random pattern and a single captured instant.
    ///
    /// Date and time are both read from `at`, so the two segments can never
    /// straddle a second or day boundary.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use refwidget_types::ReferenceToken;
    /// let at = NaiveDate::from_ymd_opt(2025, 9, 17).unwrap().and_hms_opt(10, 15, 45).unwrap();
    /// let token = ReferenceToken::compose("J4L5", &at).unwrap();
    /// assert_eq!(token.as_str(), "[Ref:J4L5/250917/101545]");
    /// ```
    pub fn compose(pattern: &str, at: &NaiveDateTime) -> Result<Self, TokenParseError> {
        if !is_valid_pattern(pattern) {
            return Err(TokenParseError::InvalidPattern(pattern.to_string()));
        }
        Ok(Self::assemble(pattern, at))
    }

    /// Build a token from raw random draws, one per pattern position.
    ///
    /// Even positions map onto `A-Z`, odd positions onto `0-9`; out-of-range
    /// draws wrap, so every input yields a well-formed token.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use refwidget_types::ReferenceToken;
    /// let at = NaiveDate::from_ymd_opt(2025, 9, 17).unwrap().and_hms_opt(10, 15, 45).unwrap();
    /// let token = ReferenceToken::from_draws([9, 4, 11, 5], &at);
    /// assert_eq!(token.as_str(), "[Ref:J4L5/250917/101545]");
    /// ```
    pub fn from_draws(draws: [u8; PATTERN_LEN], at: &NaiveDateTime) -> Self {
        let pattern: String = draws
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                if i % 2 == 0 {
                    char::from(b'A' + d % 26)
                } else {
                    char::from(b'0' + d % 10)
                }
            })
            .collect();
        Self::assemble(&pattern, at)
    }

    fn assemble(pattern: &str, at: &NaiveDateTime) -> Self {
        Self(format!(
            "{PREFIX}{pattern}/{}/{}{SUFFIX}",
            format_date_segment(at),
            format_time_segment(at)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The alternating letter/digit segment, e.g. `J4L5`.
    pub fn pattern(&self) -> &str {
        self.segment(0)
    }

    /// The `YYMMDD` segment.
    pub fn date_segment(&self) -> &str {
        self.segment(1)
    }

    /// The `HHMMSS` segment.
    pub fn time_segment(&self) -> &str {
        self.segment(2)
    }

    fn segment(&self, idx: usize) -> &str {
        // Shape is guaranteed by construction
        self.0[PREFIX.len()..self.0.len() - SUFFIX.len()]
            .split('/')
            .nth(idx)
            .unwrap_or_default()
    }
}

/// Positions 0 and 2 are `A-Z`, positions 1 and 3 are `0-9`.
fn is_valid_pattern(pattern: &str) -> bool {
    pattern.len() == PATTERN_LEN
        && pattern.bytes().enumerate().all(|(i, b)| {
            if i % 2 == 0 {
                b.is_ascii_uppercase()
            } else {
                b.is_ascii_digit()
            }
        })
}

fn is_digit_segment(s: &str) -> bool {
    s.len() == SEGMENT_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for ReferenceToken {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_suffix(SUFFIX))
            .ok_or(TokenParseError::MissingDelimiters)?;

        let parts: Vec<&str> = inner.split('/').collect();
        let [pattern, date, time] = parts.as_slice() else {
            return Err(TokenParseError::WrongSegmentCount);
        };

        if !is_valid_pattern(pattern) {
            return Err(TokenParseError::InvalidPattern(pattern.to_string()));
        }
        if !is_digit_segment(date) {
            return Err(TokenParseError::InvalidDate(date.to_string()));
        }
        if !is_digit_segment(time) {
            return Err(TokenParseError::InvalidTime(time.to_string()));
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ReferenceToken {
    type Error = TokenParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReferenceToken> for String {
    fn from(token: ReferenceToken) -> Self {
        token.0
    }
}

impl fmt::Display for ReferenceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReferenceToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 17)
            .unwrap()
            .and_hms_opt(10, 15, 45)
            .unwrap()
    }

    #[test]
    fn compose_exposes_segments() {
        let token = ReferenceToken::compose("A1B2", &sample_instant()).unwrap();
        assert_eq!(token.pattern(), "A1B2");
        assert_eq!(token.date_segment(), "250917");
        assert_eq!(token.time_segment(), "101545");
        assert_eq!(token.to_string(), "[Ref:A1B2/250917/101545]");
    }

    #[test]
    fn compose_rejects_bad_patterns() {
        let at = sample_instant();
        for bad in ["1A2B", "a1b2", "A1B", "A1B2C", "AABB", "A1B!"] {
            assert_eq!(
                ReferenceToken::compose(bad, &at),
                Err(TokenParseError::InvalidPattern(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn from_draws_wraps_out_of_range_values() {
        let token = ReferenceToken::from_draws([26, 10, 51, 255], &sample_instant());
        assert_eq!(token.pattern(), "A0Z5");
    }

    #[test]
    fn parse_accepts_well_formed_token() {
        let token: ReferenceToken = "[Ref:Z9Q0/991231/235959]".parse().unwrap();
        assert_eq!(token.pattern(), "Z9Q0");
        assert_eq!(token.date_segment(), "991231");
    }

    #[test]
    fn parse_rejects_malformed_tokens() {
        assert_eq!(
            "Ref:A1B2/250917/101545".parse::<ReferenceToken>(),
            Err(TokenParseError::MissingDelimiters)
        );
        assert_eq!(
            "[Ref:A1B2/250917]".parse::<ReferenceToken>(),
            Err(TokenParseError::WrongSegmentCount)
        );
        assert_eq!(
            "[Ref:A1B2/25091/101545]".parse::<ReferenceToken>(),
            Err(TokenParseError::InvalidDate("25091".to_string()))
        );
        assert_eq!(
            "[Ref:A1B2/250917/10154x]".parse::<ReferenceToken>(),
            Err(TokenParseError::InvalidTime("10154x".to_string()))
        );
    }
}
