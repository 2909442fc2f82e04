//! High-level folder-to-bars pipeline.

use std::path::Path;
use tickbar_aggregate::{BarAggregator, BucketAlignment, Ohlcv};
use tickbar_clean::{CleanOutcome, CleanReport, clean};
use tickbar_source::{csv_files, read_rows};
use tickbar_types::{Interval, Result};

/// Runs the full pipeline over a folder of tick CSV files.
///
/// Parses the interval expression, loads every data row from the folder's
/// `.csv` files in file-name order, sanitizes the rows, and folds the
/// surviving ticks into OHLCV bars sorted by bucket start. Returns the bars
/// together with the sanitizer's drop accounting.
///
/// # Errors
///
/// Fails on an invalid interval expression, or when the folder or one of
/// its files cannot be read. Per-row data defects are dropped and counted,
/// never fatal.
pub async fn bars_from_folder(
    folder: &Path,
    interval: &str,
    alignment: BucketAlignment,
) -> Result<(Vec<Ohlcv>, CleanReport)> {
    // A bad interval aborts before any file is touched.
    let interval: Interval = interval.parse()?;

    let mut rows = Vec::new();
    for file in csv_files(folder)? {
        rows.extend(read_rows(&file).await?);
    }

    let CleanOutcome { ticks, report } = clean(rows);

    let mut aggregator = BarAggregator::with_alignment(interval, alignment);
    for tick in &ticks {
        aggregator.push(*tick);
    }
    Ok((aggregator.finish(), report))
}
