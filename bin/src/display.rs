//! Output formatting utilities for the tickbar CLI.

use anyhow::Result;
use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tickbar_lib::prelude::*;

/// Output format for aggregated data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Tsv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write OHLCV bars to a file in the specified format.
pub(crate) fn write_bars(bars: &[Ohlcv], output: &Path, format: Format) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => CsvFormatter::new().write_bars(bars, writer)?,
        Format::Tsv => CsvFormatter::tsv().write_bars(bars, writer)?,
        Format::Json => JsonFormatter::new().write_bars(bars, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_bars(bars, writer)?,
    }

    Ok(())
}

/// Write cleaned ticks to a file in the specified format.
pub(crate) fn write_ticks(ticks: &[Tick], output: &Path, format: Format) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => CsvFormatter::new().write_ticks(ticks, writer)?,
        Format::Tsv => CsvFormatter::tsv().write_ticks(ticks, writer)?,
        Format::Json => JsonFormatter::new().write_ticks(ticks, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_ticks(ticks, writer)?,
    }

    Ok(())
}
