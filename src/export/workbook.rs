//! Writing rows to an `.xlsx` workbook.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};

use crate::error::{Error, Result};
use crate::export::row::{ExportCell, ExportRow};
use crate::fs::{export_filename, make_unique_filename};

/// Write `rows` to a new `downloaded_files_<timestamp>.xlsx` in `dir`.
///
/// The sheet has one header row followed by one row per record. An empty
/// input or a failed write produces no file.
pub fn export_to_xlsx<R: ExportRow>(rows: &[R], dir: &Path) -> Result<PathBuf> {
    if rows.is_empty() {
        return Err(Error::Export("No data to export".into()));
    }

    let buffer = build_workbook(rows)
        .map_err(|e| Error::Export(format!("Failed to build workbook: {}", e)))?;

    // Same-second exports get a numeric suffix instead of overwriting.
    let path = make_unique_filename(&dir.join(export_filename(Local::now())));

    if let Err(e) = fs::write(&path, &buffer) {
        let _ = fs::remove_file(&path);
        return Err(Error::Export(format!(
            "Error exporting to {}: {}",
            path.display(),
            e
        )));
    }

    tracing::info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(path)
}

fn build_workbook<R: ExportRow>(rows: &[R]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let header_format = Format::new().set_bold();

    for (col, header) in R::headers().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let row_idx = (i + 1) as u32;
        for (col, cell) in row.cells().into_iter().enumerate() {
            match cell {
                ExportCell::Text(text) => {
                    worksheet.write_string(row_idx, col as u16, text)?;
                }
                ExportCell::Number(number) => {
                    worksheet.write_number(row_idx, col as u16, number)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;
    use crate::fs::FileEntry;
    use crate::history::DownloadRecord;
    use calamine::{open_workbook_auto, Reader};

    fn records(n: usize) -> Vec<DownloadRecord> {
        (0..n)
            .map(|i| {
                DownloadRecord::new(
                    format!("clip{}.mp4", i),
                    Platform::YouTube,
                    format!("https://youtu.be/{}", i),
                    PathBuf::from(format!("/tmp/dl/clip{}.mp4", i)),
                )
            })
            .collect()
    }

    fn xlsx_files(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().map_or(false, |e| e == "xlsx"))
            .collect()
    }

    #[test]
    fn test_empty_export_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let rows: Vec<DownloadRecord> = Vec::new();

        let result = export_to_xlsx(&rows, dir.path());
        assert!(matches!(result, Err(Error::Export(_))));
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_export_writes_header_plus_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_to_xlsx(&records(3), dir.path()).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("downloaded_files_"));
        assert!(name.ends_with(".xlsx"));
        assert_eq!(xlsx_files(dir.path()).len(), 1);

        let mut workbook = open_workbook_auto(&path).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        assert_eq!(range.height(), 4);

        let header: Vec<String> = range.rows().next().unwrap().iter().map(|c| c.to_string()).collect();
        assert_eq!(header, vec!["Filename", "Source", "URL", "Path", "Date"]);

        let first: Vec<String> = range.rows().nth(1).unwrap().iter().map(|c| c.to_string()).collect();
        assert_eq!(first[0], "clip0.mp4");
        assert_eq!(first[1], "YouTube");
    }

    #[test]
    fn test_export_file_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.mp4"), vec![0u8; 1024]).unwrap();
        let entries = crate::fs::list_files(dir.path()).unwrap();

        let out = tempfile::tempdir().unwrap();
        let path = export_to_xlsx::<FileEntry>(&entries, out.path()).unwrap();

        let mut workbook = open_workbook_auto(&path).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        assert_eq!(range.height(), 2);

        let header: Vec<String> = range.rows().next().unwrap().iter().map(|c| c.to_string()).collect();
        assert_eq!(header, vec!["Filename", "Path", "Size (KB)", "Created"]);
    }

    #[test]
    fn test_same_second_exports_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let rows = records(1);

        let first = export_to_xlsx(&rows, dir.path()).unwrap();
        let second = export_to_xlsx(&rows, dir.path()).unwrap();

        assert_ne!(first, second);
        assert_eq!(xlsx_files(dir.path()).len(), 2);
    }

    #[test]
    fn test_unwritable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let result = export_to_xlsx(&records(1), &missing);
        assert!(matches!(result, Err(Error::Export(_))));
        assert!(!missing.exists());
    }
}
