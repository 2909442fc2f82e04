//! CSV output format.

use std::io::Write;
use tickbar_aggregate::Ohlcv;
use tickbar_types::Tick;

use crate::{FormatError, Formatter};

/// Timestamp format used in CSV output. The fractional part appears only
/// when the timestamp carries sub-second precision, matching the legacy
/// `YYYY-MM-DD HH:MM:SS[.ffffff]` convention.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_ticks<W: Write + Send>(
        &self,
        ticks: &[Tick],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "timestamp{d}price{d}volume")?;
        }

        for tick in ticks {
            writeln!(
                writer,
                "{}{d}{}{d}{}",
                tick.timestamp.format(TIMESTAMP_FORMAT),
                tick.price,
                tick.volume
            )?;
        }

        Ok(())
    }

    fn write_bars<W: Write + Send>(
        &self,
        bars: &[Ohlcv],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "timestamp{d}open{d}high{d}low{d}close{d}volume")?;
        }

        for bar in bars {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                bar.timestamp.format(TIMESTAMP_FORMAT),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.volume
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};
    use std::io::Cursor;

    fn create_test_bar() -> Ohlcv {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();
        Ohlcv::new(timestamp, 100.5, 101.25, 99.75, 100.0, 42)
    }

    #[test]
    fn test_csv_bars() {
        let formatter = CsvFormatter::new();
        let bars = vec![create_test_bar()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&bars, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("timestamp,open,high,low,close,volume\n"));
        assert!(result.contains("2024-01-15 12:30:00,100.5,101.25,99.75,100,42"));
    }

    #[test]
    fn test_csv_ticks_with_fraction() {
        let formatter = CsvFormatter::new();
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap()
            + TimeDelta::microseconds(500_000);
        let ticks = vec![Tick::new(timestamp, 100.5, 10)];
        let mut output = Cursor::new(Vec::new());

        formatter.write_ticks(&ticks, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("timestamp,price,volume"));
        assert!(result.contains("2024-01-15 12:30:45.500,100.5,10"));
    }

    #[test]
    fn test_csv_whole_second_has_no_fraction() {
        let formatter = CsvFormatter::new().with_header(false);
        let bars = vec![create_test_bar()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&bars, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(result.lines().next().unwrap().split(',').next().unwrap(),
            "2024-01-15 12:30:00");
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&[create_test_bar()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("timestamp,open"));
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&[create_test_bar()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("timestamp\topen\thigh"));
    }
}
