//! Inspect command implementation.
//!
//! Loads and sanitizes a folder without writing anything, then reports row
//! counts, drop reasons, and the time span covered by the valid ticks.

use anyhow::Result;
use std::path::Path;
use tickbar_lib::prelude::*;

use crate::commands::load_folder;

pub(crate) async fn inspect_folder(folder: &Path, quiet: bool) -> Result<()> {
    let (rows, files) = load_folder(folder, quiet).await?;

    let CleanOutcome { ticks, report } = clean(rows);

    println!("Folder:        {}", folder.display());
    println!("CSV files:     {files}");
    println!("Rows seen:     {}", report.rows_seen);
    println!("Retained:      {}", report.retained());
    println!("Malformed:     {}", report.dropped_malformed);
    println!("Out of range:  {}", report.dropped_out_of_range);

    if let (Some(first), Some(last)) = (ticks.first(), ticks.last()) {
        println!(
            "Time span:     {} to {}",
            first.timestamp.format("%Y-%m-%d %H:%M:%S%.f"),
            last.timestamp.format("%Y-%m-%d %H:%M:%S%.f")
        );
        let notional: f64 = ticks.iter().map(Tick::notional).sum();
        println!("Notional:      {notional:.2}");
    }

    Ok(())
}
