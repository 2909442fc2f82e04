//! Row parsing and batch sanitization.

use chrono::NaiveDateTime;
use thiserror::Error;
use tickbar_types::Tick;

use crate::CleanReport;

/// Timestamp format accepted from raw rows. The fractional part is optional
/// on input and carries up to microsecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Why a raw row was dropped.
///
/// Defects are recovered locally: a defective row is counted and skipped,
/// never fatal to the batch. Modeling them as a per-row `Result` keeps the
/// drop policy visible and testable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDefect {
    /// Wrong field count, or a timestamp/price/volume that failed to parse.
    #[error("malformed row")]
    Malformed,

    /// Parsed price was zero, negative, or not a number.
    #[error("non-positive price")]
    NonPositivePrice,

    /// Parsed volume was zero or negative.
    #[error("non-positive volume")]
    NonPositiveVolume,
}

/// Result of sanitizing a batch of raw rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutcome {
    /// Surviving ticks, sorted ascending by timestamp.
    pub ticks: Vec<Tick>,
    /// Aggregate drop accounting.
    pub report: CleanReport,
}

/// Parses one raw row into a tick.
///
/// Expects exactly three fields: timestamp, price, volume. Returns the defect
/// that disqualified the row otherwise.
///
/// # Errors
///
/// Returns [`RowDefect::Malformed`] when the field count or any field's syntax
/// is wrong, and [`RowDefect::NonPositivePrice`] / [`RowDefect::NonPositiveVolume`]
/// when a parsed value is out of range.
pub fn parse_record(fields: &[String]) -> Result<Tick, RowDefect> {
    let [ts, price, volume] = fields else {
        return Err(RowDefect::Malformed);
    };

    let timestamp = NaiveDateTime::parse_from_str(ts.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| RowDefect::Malformed)?
        .and_utc();
    let price: f64 = price.trim().parse().map_err(|_| RowDefect::Malformed)?;
    let volume: i64 = volume.trim().parse().map_err(|_| RowDefect::Malformed)?;

    if price.is_nan() || price <= 0.0 {
        return Err(RowDefect::NonPositivePrice);
    }
    if volume <= 0 {
        return Err(RowDefect::NonPositiveVolume);
    }

    Ok(Tick::new(timestamp, price, volume as u64))
}

/// Sanitizes a batch of raw rows into a valid, time-sorted tick sequence.
///
/// Each row is parsed independently; defective rows are dropped and counted.
/// Survivors are sorted ascending by timestamp with a stable sort, so rows
/// sharing a timestamp keep their input order.
pub fn clean<I>(rows: I) -> CleanOutcome
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut report = CleanReport::default();
    let mut ticks = Vec::new();

    for row in rows {
        report.rows_seen += 1;
        match parse_record(&row) {
            Ok(tick) => ticks.push(tick),
            Err(RowDefect::Malformed) => report.dropped_malformed += 1,
            Err(RowDefect::NonPositivePrice | RowDefect::NonPositiveVolume) => {
                report.dropped_out_of_range += 1;
            }
        }
    }

    ticks.sort_by_key(|tick| tick.timestamp);
    CleanOutcome { ticks, report }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_record_valid() {
        let tick = parse_record(&row(&["2024-01-01 00:00:00.000", "100.5", "10"])).unwrap();
        assert!((tick.price - 100.5).abs() < 1e-10);
        assert_eq!(tick.volume, 10);
        assert_eq!(tick.timestamp.timestamp(), 1_704_067_200);
    }

    #[test]
    fn test_parse_record_optional_fraction() {
        assert!(parse_record(&row(&["2024-01-01 00:00:00", "1.0", "1"])).is_ok());
        assert!(parse_record(&row(&["2024-01-01 00:00:00.123456", "1.0", "1"])).is_ok());
    }

    #[test]
    fn test_parse_record_defects() {
        assert_eq!(
            parse_record(&row(&["bad", "x", "y"])).unwrap_err(),
            RowDefect::Malformed
        );
        assert_eq!(
            parse_record(&row(&["2024-01-01 00:00:00", "1.0"])).unwrap_err(),
            RowDefect::Malformed
        );
        assert_eq!(
            parse_record(&row(&["2024-01-01 00:00:00", "-5", "10"])).unwrap_err(),
            RowDefect::NonPositivePrice
        );
        assert_eq!(
            parse_record(&row(&["2024-01-01 00:00:00", "NaN", "10"])).unwrap_err(),
            RowDefect::NonPositivePrice
        );
        assert_eq!(
            parse_record(&row(&["2024-01-01 00:00:00", "1.0", "0"])).unwrap_err(),
            RowDefect::NonPositiveVolume
        );
        assert_eq!(
            parse_record(&row(&["2024-01-01 00:00:00", "1.0", "3.5"])).unwrap_err(),
            RowDefect::Malformed
        );
    }

    #[test]
    fn test_clean_rejection_scenario() {
        let outcome = clean(vec![
            row(&["2024-01-01 00:00:00.000", "100.5", "10"]),
            row(&["bad", "x", "y"]),
            row(&["2024-01-01 00:00:00.500", "-5", "10"]),
        ]);

        assert_eq!(outcome.ticks.len(), 1);
        assert!((outcome.ticks[0].price - 100.5).abs() < 1e-10);
        assert_eq!(outcome.report.rows_seen, 3);
        assert_eq!(outcome.report.dropped_malformed, 1);
        assert_eq!(outcome.report.dropped_out_of_range, 1);
        assert_eq!(outcome.report.retained(), 1);
    }

    #[test]
    fn test_clean_sorts_by_timestamp() {
        let outcome = clean(vec![
            row(&["2024-01-01 00:00:02", "3.0", "1"]),
            row(&["2024-01-01 00:00:00", "1.0", "1"]),
            row(&["2024-01-01 00:00:01", "2.0", "1"]),
        ]);

        let prices: Vec<f64> = outcome.ticks.iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
        assert!(
            outcome
                .ticks
                .windows(2)
                .all(|w| w[0].timestamp <= w[1].timestamp)
        );
    }

    #[test]
    fn test_clean_stable_on_timestamp_ties() {
        let outcome = clean(vec![
            row(&["2024-01-01 00:00:00", "1.0", "1"]),
            row(&["2024-01-01 00:00:00", "2.0", "1"]),
            row(&["2024-01-01 00:00:00", "3.0", "1"]),
        ]);

        let prices: Vec<f64> = outcome.ticks.iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_clean_idempotent() {
        let first = clean(vec![
            row(&["2024-01-01 00:00:01.250", "2.5", "4"]),
            row(&["2024-01-01 00:00:00", "1.0", "1"]),
            row(&["garbage", "1.0", "1"]),
        ]);

        // Re-adapt surviving ticks back to raw form and clean again.
        let raw: Vec<Vec<String>> = first
            .ticks
            .iter()
            .map(|t| {
                row(&[
                    &t.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                    &t.price.to_string(),
                    &t.volume.to_string(),
                ])
            })
            .collect();
        let second = clean(raw);

        assert_eq!(second.ticks, first.ticks);
        assert_eq!(second.report.dropped(), 0);
    }

    #[test]
    fn test_clean_empty() {
        let outcome = clean(Vec::new());
        assert!(outcome.ticks.is_empty());
        assert_eq!(outcome.report.rows_seen, 0);
    }
}
