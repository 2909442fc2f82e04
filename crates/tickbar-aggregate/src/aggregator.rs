//! Batch tick-to-OHLCV aggregation.

use chrono::{DateTime, TimeDelta, Timelike, Utc};
use std::collections::HashMap;
use tickbar_types::{Interval, Tick};

use crate::Ohlcv;

/// Policy for flooring a tick timestamp to its bucket start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BucketAlignment {
    /// Floor to the absolute epoch-aligned grid: `t - (t mod interval)`.
    ///
    /// Buckets form one uniform modular grid across minute boundaries.
    #[default]
    Epoch,

    /// Floor relative to the top of the current minute, reproducing the
    /// legacy tool exactly: `t - seconds(t.second mod interval) - micros(t)`.
    ///
    /// Intervals that do not divide 60 reset at every minute boundary, and
    /// intervals above a minute only strip the seconds component. Kept for
    /// bit-for-bit compatibility with output produced by the legacy tool.
    MinuteLocal,
}

impl BucketAlignment {
    /// Floors a timestamp to the start of its bucket.
    ///
    /// A zero-width interval keys every tick by its own timestamp under
    /// either policy (degenerate but accepted).
    #[must_use]
    pub fn bucket_start(&self, timestamp: DateTime<Utc>, interval: Interval) -> DateTime<Utc> {
        if interval.is_zero() {
            return timestamp;
        }
        match self {
            Self::Epoch => {
                let micros = timestamp.timestamp_micros();
                let width = interval.as_micros();
                DateTime::from_timestamp_micros(micros - micros.rem_euclid(width)).unwrap()
            }
            Self::MinuteLocal => {
                let width = interval.as_secs().min(Interval::MAX_SECS) as i64;
                let excess = i64::from(timestamp.second()) % width;
                timestamp
                    - TimeDelta::seconds(excess)
                    - TimeDelta::microseconds(i64::from(timestamp.timestamp_subsec_micros()))
            }
        }
    }
}

/// Batch tick aggregator.
///
/// Folds a time-sorted tick sequence into OHLCV bars keyed by bucket start.
/// The working map is unordered; ordering comes from the explicit sort in
/// [`finish`](Self::finish), never from insertion order.
///
/// Precondition: ticks must be pushed in ascending timestamp order (the
/// sanitizer guarantees this). The aggregator does not re-sort input, and
/// `close` is last-write-wins, so ordering is load-bearing.
#[derive(Debug)]
pub struct BarAggregator {
    interval: Interval,
    alignment: BucketAlignment,
    buckets: HashMap<DateTime<Utc>, BarState>,
}

impl BarAggregator {
    /// Creates a new aggregator with epoch-aligned bucketing.
    #[must_use]
    pub fn new(interval: Interval) -> Self {
        Self::with_alignment(interval, BucketAlignment::default())
    }

    /// Creates a new aggregator with an explicit bucket alignment.
    #[must_use]
    pub fn with_alignment(interval: Interval, alignment: BucketAlignment) -> Self {
        Self {
            interval,
            alignment,
            buckets: HashMap::new(),
        }
    }

    /// Returns the configured interval.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the configured bucket alignment.
    #[must_use]
    pub const fn alignment(&self) -> BucketAlignment {
        self.alignment
    }

    /// Folds one tick into its bucket.
    pub fn push(&mut self, tick: Tick) {
        let key = self.alignment.bucket_start(tick.timestamp, self.interval);
        self.buckets
            .entry(key)
            .and_modify(|state| state.update(&tick))
            .or_insert_with(|| BarState::open(&tick));
    }

    /// Finalizes aggregation, returning bars sorted ascending by bucket start.
    ///
    /// Buckets that saw no ticks are simply absent; there is no gap-filling.
    #[must_use]
    pub fn finish(self) -> Vec<Ohlcv> {
        let mut bars: Vec<Ohlcv> = self
            .buckets
            .into_iter()
            .map(|(timestamp, state)| state.finish(timestamp))
            .collect();
        bars.sort_by_key(|bar| bar.timestamp);
        bars
    }
}

/// Aggregates a time-sorted tick slice into sorted OHLCV bars.
///
/// Convenience wrapper over [`BarAggregator`] with the default alignment.
#[must_use]
pub fn aggregate(ticks: &[Tick], interval: Interval) -> Vec<Ohlcv> {
    let mut aggregator = BarAggregator::new(interval);
    for tick in ticks {
        aggregator.push(*tick);
    }
    aggregator.finish()
}

/// In-progress bar for one bucket.
#[derive(Debug)]
struct BarState {
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

impl BarState {
    /// Opens a bucket from its first tick.
    const fn open(tick: &Tick) -> Self {
        Self {
            open: tick.price,
            high: tick.price,
            low: tick.price,
            close: tick.price,
            volume: tick.volume,
        }
    }

    /// Folds a subsequent tick into the bucket.
    fn update(&mut self, tick: &Tick) {
        self.high = self.high.max(tick.price);
        self.low = self.low.min(tick.price);
        self.close = tick.price;
        self.volume += tick.volume;
    }

    /// Seals the bucket into a finalized bar.
    const fn finish(self, timestamp: DateTime<Utc>) -> Ohlcv {
        Ohlcv::new(
            timestamp,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
        )
    }
}
