//! OHLCV aggregation for the tickbar toolkit.
//!
//! This crate provides tick-to-OHLCV (candlestick) aggregation:
//!
//! - [`Ohlcv`] - OHLCV bar data structure
//! - [`BarAggregator`] - Batch tick aggregator
//! - [`BucketAlignment`] - Bucket flooring policy

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod ohlcv;

pub use aggregator::{BarAggregator, BucketAlignment, aggregate};
pub use ohlcv::Ohlcv;
