//! JSON output format.

use std::io::Write;
use tickbar_aggregate::Ohlcv;
use tickbar_types::Tick;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_values<W: Write + Send, T: serde::Serialize>(
        &self,
        values: &[T],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, values)?;
                } else {
                    serde_json::to_writer(&mut writer, values)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for value in values {
                    serde_json::to_writer(&mut writer, value)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_ticks<W: Write + Send>(&self, ticks: &[Tick], writer: W) -> Result<(), FormatError> {
        self.write_values(ticks, writer)
    }

    fn write_bars<W: Write + Send>(&self, bars: &[Ohlcv], writer: W) -> Result<(), FormatError> {
        self.write_values(bars, writer)
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
