//! Platform downloaders.
//!
//! This module provides:
//! - The `PlatformDownloader` contract the dispatcher routes to
//! - YouTube stream resolution through yt-dlp
//! - Instagram post resolution through the public GraphQL endpoint

pub mod instagram;
pub mod youtube;

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Platform;
use crate::error::{Error, Result};
use crate::fs::video_filename;

pub use instagram::{extract_shortcode, InstagramDownloader, InstagramPost};
pub use youtube::{select_progressive, StreamFormat, VideoInfo, YouTubeDownloader};

/// Where a download should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    /// Existing output directory.
    pub directory: PathBuf,

    /// Sanitized filename including the `.mp4` extension.
    pub filename: String,
}

impl DownloadTarget {
    /// Build a target from a directory and a raw, user supplied name.
    pub fn new(directory: &Path, name: &str) -> Self {
        Self {
            directory: directory.to_path_buf(),
            filename: video_filename(name),
        }
    }

    /// Full path of the output file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// A client able to fetch one video from a platform into a file.
#[async_trait]
pub trait PlatformDownloader: Send + Sync {
    /// Platform handled by this downloader.
    fn platform(&self) -> Platform;

    /// Download the video at `url` to `target`, returning the path written.
    async fn download(&self, url: &str, target: &DownloadTarget) -> Result<PathBuf>;
}

/// Build the HTTP client shared by a downloader.
///
/// Only connecting is bounded; video bodies may take arbitrarily long.
pub(crate) fn build_http_client(user_agent: &str, timeout_seconds: u64) -> Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(Duration::from_secs(timeout_seconds))
        .build()
        .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))
}
