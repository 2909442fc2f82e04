//! OHLCV (candlestick) data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV bar (candlestick) data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ohlcv {
    /// Bar open time (start of the bucket).
    pub timestamp: DateTime<Utc>,
    /// Opening price (earliest tick in the bucket).
    pub open: f64,
    /// Highest price during the bucket.
    pub high: f64,
    /// Lowest price during the bucket.
    pub low: f64,
    /// Closing price (latest tick in the bucket).
    pub close: f64,
    /// Total traded volume.
    pub volume: u64,
}

impl Ohlcv {
    /// Creates a new OHLCV bar.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) bar.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn create_test_bar() -> Ohlcv {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Ohlcv::new(timestamp, 100.0, 105.0, 98.0, 102.0, 1000)
    }

    #[test]
    fn test_range() {
        assert_relative_eq!(create_test_bar().range(), 7.0);
    }

    #[test]
    fn test_body() {
        assert_relative_eq!(create_test_bar().body(), 2.0);
    }

    #[test]
    fn test_bullish_bearish() {
        let bar = create_test_bar();
        assert!(bar.is_bullish());
        assert!(!bar.is_bearish());

        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let bar = Ohlcv::new(timestamp, 102.0, 105.0, 98.0, 100.0, 1000);
        assert!(bar.is_bearish());
        assert!(!bar.is_bullish());
    }
}
