//! Error types for tickbar.

use thiserror::Error;

use crate::IntervalParseError;

/// Result type alias for tickbar operations.
pub type Result<T> = std::result::Result<T, TickbarError>;

/// Errors that can occur while loading, aggregating, or writing data.
///
/// Per-row defects never appear here: malformed or out-of-range rows are
/// dropped and counted by the sanitizer. Only failures that abort a whole
/// run are represented.
#[derive(Error, Debug)]
pub enum TickbarError {
    /// Invalid interval expression.
    #[error(transparent)]
    Interval(#[from] IntervalParseError),

    /// Input source failure (unreadable folder or file).
    #[error("Source error: {0}")]
    Source(String),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
