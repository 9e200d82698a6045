//! Directory listing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;

/// A regular file found by a directory scan.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub filename: String,
    pub path: PathBuf,
    /// Size in kilobytes, rounded to two decimals.
    pub size_kb: f64,
    pub created: DateTime<Local>,
}

/// List the regular files directly inside `dir` (non-recursive).
///
/// Entries come back in filesystem enumeration order.
pub fn list_files(dir: &Path) -> Result<Vec<FileEntry>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        // Follows symlinks, like a plain "is this a file" check would.
        let metadata = match fs::metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if !metadata.is_file() {
            continue;
        }

        let created = metadata
            .created()
            .or_else(|_| metadata.modified())
            .map(DateTime::<Local>::from)
            .unwrap_or_else(|_| Local::now());

        files.push(FileEntry {
            filename: entry.file_name().to_string_lossy().into_owned(),
            path,
            size_kb: size_in_kb(metadata.len()),
            created,
        });
    }

    tracing::debug!("Found {} files in {}", files.len(), dir.display());
    Ok(files)
}

/// Convert a byte count to kilobytes rounded to two decimals.
pub fn size_in_kb(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 * 100.0).round() / 100.0
}
