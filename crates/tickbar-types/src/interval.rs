//! Aggregation interval and its compact duration grammar.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// An aggregation bucket width in whole seconds.
///
/// Parsed from compact duration expressions such as `"30s"`, `"1m"`, `"2h"`,
/// or composites like `"1h30m"`. A zero interval is representable (every tick
/// falls in its own bucket) but degenerate; the grammar can produce it, so the
/// aggregator tolerates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interval(u64);

impl Interval {
    /// One-second interval.
    pub const SECOND: Self = Self(1);
    /// One-minute interval.
    pub const MINUTE: Self = Self(60);
    /// One-hour interval.
    pub const HOUR: Self = Self(3600);
    /// One-day interval.
    pub const DAY: Self = Self(86400);

    /// Largest width in whole seconds accepted by the grammar. Keeps the
    /// microsecond conversion within `i64`.
    pub const MAX_SECS: u64 = i64::MAX as u64 / 1_000_000;

    /// Creates an interval from a whole number of seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the interval width in whole seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns the interval width in microseconds.
    ///
    /// The grammar never produces widths above [`Self::MAX_SECS`], but
    /// [`from_secs`](Self::from_secs) can; those saturate at `i64::MAX`.
    #[must_use]
    pub const fn as_micros(&self) -> i64 {
        if self.0 > Self::MAX_SECS {
            i64::MAX
        } else {
            self.0 as i64 * 1_000_000
        }
    }

    /// Returns true for the degenerate zero-width interval.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the interval as a [`TimeDelta`], clamped to [`Self::MAX_SECS`].
    #[must_use]
    pub fn as_delta(&self) -> TimeDelta {
        TimeDelta::seconds(self.0.min(Self::MAX_SECS) as i64)
    }

    /// Seconds denoted by a unit character, or `None` if unrecognized.
    const fn unit_secs(unit: char) -> Option<u64> {
        match unit {
            's' => Some(1),
            'm' => Some(60),
            'h' => Some(3600),
            'd' => Some(86400),
            _ => None,
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rest = self.0;
        if rest == 0 {
            return write!(f, "0s");
        }
        for (unit, secs) in [('d', 86400), ('h', 3600), ('m', 60), ('s', 1)] {
            if rest >= secs {
                write!(f, "{}{unit}", rest / secs)?;
                rest %= secs;
            }
        }
        Ok(())
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    /// Parses a compact duration expression.
    ///
    /// Scans left to right, buffering digit runs. Each unit character
    /// (`s`, `m`, `h`, `d`) converts the buffered digits (0 if the buffer is
    /// empty) into seconds and adds them to a running total. Composite
    /// expressions sum their terms: `"1h30m"` is 5400 seconds. A trailing
    /// digit run with no unit is discarded, not an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IntervalParseError::Empty);
        }

        let mut total: u64 = 0;
        let mut buf = String::new();

        for c in s.chars() {
            if c.is_ascii_digit() {
                buf.push(c);
                continue;
            }
            let Some(secs) = Self::unit_secs(c) else {
                return Err(IntervalParseError::UnknownUnit(c));
            };
            let count: u64 = if buf.is_empty() {
                0
            } else {
                buf.parse()
                    .map_err(|_| IntervalParseError::InvalidNumber(buf.clone()))?
            };
            total = count
                .checked_mul(secs)
                .and_then(|term| total.checked_add(term))
                .ok_or_else(|| IntervalParseError::InvalidNumber(s.to_string()))?;
            buf.clear();
        }

        if total > Self::MAX_SECS {
            return Err(IntervalParseError::InvalidNumber(s.to_string()));
        }

        // Digits left in the buffer have no unit attached; drop them.
        Ok(Self(total))
    }
}

/// Error returned when parsing an invalid interval expression.
///
/// Unlike per-row defects, a bad interval is fatal to a whole aggregation
/// run: no meaningful bucketing can proceed without one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalParseError {
    /// The expression was empty.
    #[error("empty interval expression, expected e.g. '1m', '30s', '1h30m'")]
    Empty,

    /// A character that is neither a digit nor a unit in `{s, m, h, d}`.
    #[error("unknown unit '{0}' in interval expression, expected one of: s, m, h, d")]
    UnknownUnit(char),

    /// A numeric component that cannot be represented.
    #[error("numeric component '{0}' out of range")]
    InvalidNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_units() {
        assert_eq!("1m".parse::<Interval>().unwrap().as_secs(), 60);
        assert_eq!("2h".parse::<Interval>().unwrap().as_secs(), 7200);
        assert_eq!("90s".parse::<Interval>().unwrap().as_secs(), 90);
        assert_eq!("1d".parse::<Interval>().unwrap().as_secs(), 86400);
    }

    #[test]
    fn test_parse_composite() {
        assert_eq!("1h30m".parse::<Interval>().unwrap().as_secs(), 5400);
        assert_eq!("1d2h3m4s".parse::<Interval>().unwrap().as_secs(), 93784);
    }

    #[test]
    fn test_parse_empty_buffer_defaults_to_zero() {
        // A bare unit contributes zero seconds.
        assert_eq!("m".parse::<Interval>().unwrap().as_secs(), 0);
        assert_eq!("m30s".parse::<Interval>().unwrap().as_secs(), 30);
    }

    #[test]
    fn test_parse_trailing_digits_dropped() {
        // Digits without a trailing unit are tolerated, not summed.
        assert_eq!("1m30".parse::<Interval>().unwrap().as_secs(), 60);
        assert_eq!("123".parse::<Interval>().unwrap().as_secs(), 0);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "".parse::<Interval>().unwrap_err(),
            IntervalParseError::Empty
        );
        assert_eq!(
            "1x".parse::<Interval>().unwrap_err(),
            IntervalParseError::UnknownUnit('x')
        );
        assert_eq!(
            "1m 30s".parse::<Interval>().unwrap_err(),
            IntervalParseError::UnknownUnit(' ')
        );
        assert!(matches!(
            "99999999999999999999s".parse::<Interval>().unwrap_err(),
            IntervalParseError::InvalidNumber(_)
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for expr in ["1m", "2h", "90s", "1h30m", "1d2h3m4s", "0s"] {
            let interval: Interval = expr.parse().unwrap();
            assert_eq!(interval.to_string().parse::<Interval>().unwrap(), interval);
        }
        assert_eq!("90s".parse::<Interval>().unwrap().to_string(), "1m30s");
    }

    #[test]
    fn test_as_micros() {
        assert_eq!(Interval::MINUTE.as_micros(), 60_000_000);
        assert_eq!(Interval::from_secs(0).as_micros(), 0);
    }

    #[test]
    fn test_parse_rejects_widths_beyond_microsecond_range() {
        // Grammar-valid but wider than i64 microseconds can hold.
        assert!(matches!(
            "106751991167302d".parse::<Interval>().unwrap_err(),
            IntervalParseError::InvalidNumber(_)
        ));

        // The largest accepted width still parses.
        let widest: Interval = format!("{}s", Interval::MAX_SECS).parse().unwrap();
        assert_eq!(widest.as_secs(), Interval::MAX_SECS);
    }

    #[test]
    fn test_as_micros_saturates_for_oversized_widths() {
        assert_eq!(Interval::from_secs(u64::MAX).as_micros(), i64::MAX);
        assert_eq!(
            Interval::from_secs(Interval::MAX_SECS).as_micros(),
            Interval::MAX_SECS as i64 * 1_000_000
        );
    }
}
