//! CSV input adapter for the tickbar OHLCV aggregation toolkit.
//!
//! This crate enumerates and reads tick CSV files:
//!
//! - [`csv_files`] - Deterministic folder scan for `.csv` files
//! - [`read_rows`] - Async row reader yielding raw string fields
//! - [`SourceError`] - Transport-level failures (fatal per file)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod files;
mod reader;

pub use files::csv_files;
pub use reader::{RawRow, SourceError, read_rows};
