//! vidgrab - YouTube and Instagram video downloader
//!
//! This library downloads videos by URL, keeps a per-session download
//! history, lists directory contents and exports either to `.xlsx`.
//!
//! # Features
//!
//! - Platform auto-detection from the URL
//! - YouTube downloads via yt-dlp stream resolution
//! - Instagram downloads via the public GraphQL endpoint
//! - Atomic writes through temporary `.part` files
//! - Directory listings with size and creation date
//! - Excel export of history or listings
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use vidgrab::{App, Config, DownloadRequest, PlatformSelector};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default(Path::new("vidgrab.toml"))?;
//!     let mut app = App::new(config)?;
//!
//!     let request = DownloadRequest::new(
//!         "https://youtu.be/dQw4w9WgXcQ",
//!         "clip",
//!         "/tmp",
//!         PlatformSelector::AutoDetect,
//!     );
//!     let outcome = app.download(&request).await;
//!     println!("{}", outcome.message);
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod export;
pub mod fs;
pub mod history;
pub mod output;
pub mod platform;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use app::App;
pub use config::{Config, Platform, PlatformSelector};
pub use download::{DispatchOutcome, Dispatcher, DownloadRequest};
pub use error::{Error, Result};
pub use export::export_to_xlsx;
pub use fs::FileEntry;
pub use history::{DownloadRecord, History};
pub use platform::PlatformDownloader;
