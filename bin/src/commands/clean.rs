//! Clean command implementation.
//!
//! Sanitizes a folder of tick CSV files and writes the surviving ticks,
//! time-sorted, without aggregating them.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tickbar_lib::prelude::*;

use crate::commands::load_folder;
use crate::display::{Format, write_ticks};

pub(crate) async fn clean_folder(
    folder: &Path,
    output: Option<PathBuf>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let output = output.unwrap_or_else(|| PathBuf::from(format!("ticks.{}", format.extension())));

    let (rows, _files) = load_folder(folder, quiet).await?;

    let CleanOutcome { ticks, report } = clean(rows);
    write_ticks(&ticks, &output, format)?;

    if !quiet {
        println!("{report}");
        println!("Output written to: {}", output.display());
    }

    Ok(())
}
