//! Row conversion for exportable records.

use crate::fs::FileEntry;
use crate::history::DownloadRecord;

/// Timestamp format used in exported cells.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportCell {
    Text(String),
    Number(f64),
}

impl From<String> for ExportCell {
    fn from(value: String) -> Self {
        ExportCell::Text(value)
    }
}

impl From<&str> for ExportCell {
    fn from(value: &str) -> Self {
        ExportCell::Text(value.to_string())
    }
}

impl From<f64> for ExportCell {
    fn from(value: f64) -> Self {
        ExportCell::Number(value)
    }
}

/// A record that can be written as one spreadsheet row.
///
/// `cells` must return one value per header, in header order.
pub trait ExportRow {
    fn headers() -> &'static [&'static str];

    fn cells(&self) -> Vec<ExportCell>;
}

impl ExportRow for DownloadRecord {
    fn headers() -> &'static [&'static str] {
        &["Filename", "Source", "URL", "Path", "Date"]
    }

    fn cells(&self) -> Vec<ExportCell> {
        vec![
            self.filename.as_str().into(),
            self.source.to_string().into(),
            self.url.as_str().into(),
            self.path.display().to_string().into(),
            self.date.format(DATE_FORMAT).to_string().into(),
        ]
    }
}

impl ExportRow for FileEntry {
    fn headers() -> &'static [&'static str] {
        &["Filename", "Path", "Size (KB)", "Created"]
    }

    fn cells(&self) -> Vec<ExportCell> {
        vec![
            self.filename.as_str().into(),
            self.path.display().to_string().into(),
            self.size_kb.into(),
            self.created.format(DATE_FORMAT).to_string().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;
    use chrono::{Local, TimeZone};
    use std::path::PathBuf;

    #[test]
    fn test_download_record_row() {
        let mut record = DownloadRecord::new(
            "My Video.mp4".into(),
            Platform::Instagram,
            "https://instagram.com/p/xyz".into(),
            PathBuf::from("/tmp/dl/My Video.mp4"),
        );
        record.date = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        let cells = record.cells();
        assert_eq!(cells.len(), DownloadRecord::headers().len());
        assert_eq!(cells[1], ExportCell::Text("Instagram".into()));
        assert_eq!(cells[3], ExportCell::Text("/tmp/dl/My Video.mp4".into()));
        assert_eq!(cells[4], ExportCell::Text("2024-01-02 03:04:05".into()));
    }

    #[test]
    fn test_file_entry_row() {
        let entry = FileEntry {
            filename: "clip.mp4".into(),
            path: PathBuf::from("/tmp/dl/clip.mp4"),
            size_kb: 12.5,
            created: Local.with_ymd_and_hms(2024, 6, 7, 8, 9, 10).unwrap(),
        };

        let cells = entry.cells();
        assert_eq!(cells.len(), FileEntry::headers().len());
        assert_eq!(cells[2], ExportCell::Number(12.5));
        assert_eq!(FileEntry::headers()[2], "Size (KB)");
    }
}
