//! Tick-to-OHLCV aggregation library for irregular trade data.
//!
//! This is a facade crate that re-exports functionality from the tickbar
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use tickbar_lib::prelude::*;
//!
//! let raw = vec![
//!     vec!["2024-01-01 00:00:00.100".into(), "10".into(), "1".into()],
//!     vec!["2024-01-01 00:00:30.200".into(), "12".into(), "2".into()],
//!     vec!["bad row".into(), "x".into(), "y".into()],
//! ];
//!
//! let interval: Interval = "1m".parse().unwrap();
//! let outcome = clean(raw);
//! assert_eq!(outcome.report.retained(), 2);
//!
//! let bars = aggregate(&outcome.ticks, interval);
//! assert_eq!(bars.len(), 1);
//! assert_eq!(bars[0].volume, 3);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "clean", feature = "source", feature = "aggregate"))]
mod pipeline;

// Re-export core types
pub use tickbar_types::*;

#[cfg(all(feature = "clean", feature = "source", feature = "aggregate"))]
pub use pipeline::bars_from_folder;

// Re-export sanitization
#[cfg(feature = "clean")]
pub use tickbar_clean::{CleanOutcome, CleanReport, RowDefect, clean, parse_record};

// Re-export input adapter
#[cfg(feature = "source")]
pub use tickbar_source::{RawRow, SourceError, csv_files, read_rows};

// Re-export aggregation
#[cfg(feature = "aggregate")]
pub use tickbar_aggregate::{BarAggregator, BucketAlignment, Ohlcv, aggregate};

// Re-export formatters
#[cfg(feature = "format")]
pub use tickbar_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use tickbar_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tickbar_types::{Interval, IntervalParseError, Result, Tick, TickbarError};

    #[cfg(all(feature = "clean", feature = "source", feature = "aggregate"))]
    pub use crate::bars_from_folder;

    #[cfg(feature = "clean")]
    pub use tickbar_clean::{CleanOutcome, CleanReport, RowDefect, clean, parse_record};

    #[cfg(feature = "source")]
    pub use tickbar_source::{RawRow, SourceError, csv_files, read_rows};

    #[cfg(feature = "aggregate")]
    pub use tickbar_aggregate::{BarAggregator, BucketAlignment, Ohlcv, aggregate};

    #[cfg(feature = "format")]
    pub use tickbar_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};
}
