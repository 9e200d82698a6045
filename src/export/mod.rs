//! Spreadsheet export.
//!
//! Provides:
//! - Row conversion for download records and directory listings
//! - Writing rows to a timestamped `.xlsx` workbook

pub mod row;
pub mod workbook;

pub use row::{ExportCell, ExportRow};
pub use workbook::export_to_xlsx;
