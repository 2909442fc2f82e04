//! Tick sanitization for the tickbar OHLCV aggregation toolkit.
//!
//! This crate turns raw row triples into a valid, time-sorted tick sequence:
//!
//! - [`clean`] - Batch sanitizer: parse, filter, sort
//! - [`parse_record`] - Per-row parser with an explicit [`RowDefect`] outcome
//! - [`CleanReport`] - Aggregate drop accounting for progress reporting

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cleaner;
mod report;

pub use cleaner::{CleanOutcome, RowDefect, TIMESTAMP_FORMAT, clean, parse_record};
pub use report::CleanReport;
