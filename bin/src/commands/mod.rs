//! Command implementations for the tickbar CLI.

pub(crate) mod aggregate;
pub(crate) mod clean;
pub(crate) mod inspect;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tickbar_lib::prelude::*;

/// Reads every data row from all CSV files in `folder`, in file-name order.
///
/// Prints how many files were found and shows a per-file progress bar unless
/// `quiet` is set. Row contents are not validated here.
pub(crate) async fn load_folder(folder: &Path, quiet: bool) -> Result<(Vec<RawRow>, usize)> {
    let files = csv_files(folder)
        .with_context(|| format!("Failed to read folder: {}", folder.display()))?;

    if !quiet {
        println!("Found {} CSV files.", files.len());
    }

    let progress = if quiet || files.is_empty() {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
                .expect("Invalid progress template")
                .progress_chars("=>-"),
        );
        pb
    };

    let mut rows = Vec::new();
    for file in &files {
        progress.set_message(
            file.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
        let file_rows = read_rows(file)
            .await
            .with_context(|| format!("Failed to read {}", file.display()))?;
        rows.extend(file_rows);
        progress.inc(1);
    }
    progress.finish_with_message(format!("{} rows", rows.len()));

    Ok((rows, files.len()))
}
