//! Core types for the tickbar OHLCV aggregation toolkit.
//!
//! This crate provides the fundamental data structures used throughout tickbar:
//!
//! - [`Tick`] - A single trade event with timestamp, price, and volume
//! - [`Interval`] - An aggregation bucket width with a compact duration grammar
//! - [`TickbarError`] - Top-level error type shared across the workspace

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod interval;
mod tick;

pub use error::{Result, TickbarError};
pub use interval::{Interval, IntervalParseError};
pub use tick::Tick;
