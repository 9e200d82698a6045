//! Session download history.
//!
//! Provides:
//! - Download record representation
//! - The append-only per-session history store

pub mod record;
pub mod store;

pub use record::DownloadRecord;
pub use store::History;
