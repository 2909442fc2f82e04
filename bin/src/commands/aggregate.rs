//! Aggregate command implementation.
//!
//! Runs the full pipeline: load rows from a folder, sanitize them into sorted
//! ticks, fold the ticks into OHLCV bars, and write the bars out.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tickbar_lib::prelude::*;

use crate::commands::load_folder;
use crate::display::{Format, write_bars};

pub(crate) async fn aggregate_folder(
    folder: &Path,
    interval_str: &str,
    output: Option<PathBuf>,
    format: Format,
    minute_local: bool,
    quiet: bool,
) -> Result<()> {
    // A bad interval is the one fatal input; fail before touching any file.
    let interval: Interval = interval_str
        .parse()
        .with_context(|| format!("Invalid interval: {interval_str}"))?;

    let alignment = if minute_local {
        BucketAlignment::MinuteLocal
    } else {
        BucketAlignment::Epoch
    };

    let output = output.unwrap_or_else(|| PathBuf::from(format!("bars.{}", format.extension())));

    let (rows, _files) = load_folder(folder, quiet).await?;
    let loaded = rows.len();

    let CleanOutcome { ticks, report } = clean(rows);

    let mut aggregator = BarAggregator::with_alignment(interval, alignment);
    for tick in &ticks {
        aggregator.push(*tick);
    }
    let bars = aggregator.finish();

    write_bars(&bars, &output, format)?;

    if !quiet {
        println!("Loaded {loaded} rows.");
        println!("After cleaning: {} rows remain.", report.retained());
        println!("Aggregated into {} OHLCV bars ({interval} buckets).", bars.len());
        println!("Output written to: {}", output.display());
    }

    Ok(())
}
