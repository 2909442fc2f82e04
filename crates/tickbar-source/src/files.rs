//! Folder enumeration.

use std::path::{Path, PathBuf};

/// Lists all `.csv` files directly inside `folder`, sorted by name.
///
/// Sorting makes multi-file runs deterministic regardless of directory
/// iteration order. Subdirectories are not descended into.
///
/// # Errors
///
/// Returns an error if the folder cannot be read.
pub fn csv_files(folder: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(folder)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    files.sort();
    Ok(files)
}
