//! Filename generation and manipulation.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Extension given to every downloaded video.
pub const VIDEO_EXTENSION: &str = ".mp4";

/// Characters that are never allowed in a saved filename.
const FORBIDDEN_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Remove filesystem-unsafe characters from a user supplied name.
///
/// Never fails and is idempotent.
pub fn sanitize_filename(name: &str) -> String {
    name.chars().filter(|c| !FORBIDDEN_CHARS.contains(c)).collect()
}

/// Build the final video filename: sanitized, with `.mp4` appended once.
pub fn video_filename(name: &str) -> String {
    let sanitized = sanitize_filename(name);
    if sanitized.ends_with(VIDEO_EXTENSION) {
        sanitized
    } else {
        format!("{}{}", sanitized, VIDEO_EXTENSION)
    }
}

/// Spreadsheet filename for an export made at `now`.
pub fn export_filename(now: DateTime<Local>) -> String {
    format!("downloaded_files_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}

/// Generate a unique filename by appending a number if the file exists.
pub fn make_unique_filename(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parent = path.parent().unwrap_or(Path::new("."));

    let mut counter = 1;
    loop {
        let new_name = if ext.is_empty() {
            format!("{}_{}", stem, counter)
        } else {
            format!("{}_{}.{}", stem, counter, ext)
        };

        let new_path = parent.join(&new_name);
        if !new_path.exists() {
            return new_path;
        }

        counter += 1;
        if counter > 1000 {
            // Safety limit
            return new_path;
        }
    }
}
