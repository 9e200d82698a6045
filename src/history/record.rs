//! Download record representation.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::config::Platform;

/// One successful download made during the session.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRecord {
    /// Filename written, always ending in `.mp4`.
    pub filename: String,

    /// Platform the download was routed to.
    pub source: Platform,

    /// URL as entered by the user.
    pub url: String,

    /// Absolute path of the written file.
    pub path: PathBuf,

    /// Wall-clock time the download finished.
    pub date: DateTime<Local>,
}

impl DownloadRecord {
    /// Create a record stamped with the current time.
    pub fn new(filename: String, source: Platform, url: String, path: PathBuf) -> Self {
        Self {
            filename,
            source,
            url,
            path,
            date: Local::now(),
        }
    }
}
