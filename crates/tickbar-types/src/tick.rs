//! Tick data representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single trade event.
///
/// Ticks are immutable once constructed. Non-positive prices and volumes are
/// never represented here; rows carrying them are rejected by the sanitizer
/// before a `Tick` is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Timestamp of the trade (UTC, sub-second precision).
    pub timestamp: DateTime<Utc>,
    /// Trade price.
    pub price: f64,
    /// Traded volume.
    pub volume: u64,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, price: f64, volume: u64) -> Self {
        Self {
            timestamp,
            price,
            volume,
        }
    }

    /// Returns the notional value of the trade (price * volume).
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.price * self.volume as f64
    }
}
