//! YouTube downloader.
//!
//! Stream resolution is delegated to the `yt-dlp` executable: its
//! `--dump-json` output lists every available format, from which the
//! highest-resolution progressive stream (audio and video in one file) is
//! picked and transferred directly.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::Deserialize;
use tokio::process::Command;

use crate::config::{Platform, YouTubeConfig};
use crate::download::transfer::save_response;
use crate::error::{Error, Result};
use crate::output::create_spinner;
use crate::platform::{build_http_client, DownloadTarget, PlatformDownloader};

/// Fallback user agent when yt-dlp does not report one for a format.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Video metadata as printed by `yt-dlp --dump-json`.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoInfo {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub formats: Vec<StreamFormat>,
}

/// One downloadable format of a video.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamFormat {
    pub format_id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub acodec: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Total bitrate in kbps.
    #[serde(default)]
    pub tbr: Option<f64>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub http_headers: HashMap<String, String>,
}

impl StreamFormat {
    /// Whether this format carries both audio and video over plain HTTP(S).
    pub fn is_progressive(&self) -> bool {
        let has_codec = |codec: &Option<String>| {
            codec
                .as_deref()
                .map_or(false, |c| !c.is_empty() && c != "none")
        };
        let direct = self
            .protocol
            .as_deref()
            .map_or(true, |p| p == "https" || p == "http");

        has_codec(&self.vcodec) && has_codec(&self.acodec) && direct && self.url.is_some()
    }

    fn is_mp4(&self) -> bool {
        self.ext.as_deref() == Some("mp4")
    }
}

/// Pick the highest-resolution progressive mp4 format.
///
/// Other containers are never chosen since the file is always saved as
/// `.mp4`. Ties on height prefer the higher bitrate.
pub fn select_progressive(formats: &[StreamFormat]) -> Option<&StreamFormat> {
    formats
        .iter()
        .filter(|f| f.is_progressive() && f.is_mp4())
        .max_by(|a, b| {
            a.height
                .unwrap_or(0)
                .cmp(&b.height.unwrap_or(0))
                .then_with(|| {
                    a.tbr
                        .unwrap_or(0.0)
                        .partial_cmp(&b.tbr.unwrap_or(0.0))
                        .unwrap_or(Ordering::Equal)
                })
        })
}

/// Parse `yt-dlp --dump-json` output.
pub fn parse_video_info(stdout: &[u8]) -> Result<VideoInfo> {
    serde_json::from_slice(stdout)
        .map_err(|e| Error::Download(format!("Failed to parse yt-dlp output: {}", e)))
}

/// Downloads YouTube videos through yt-dlp stream resolution.
pub struct YouTubeDownloader {
    ytdlp_path: String,
    client: Client,
    show_progress: bool,
}

impl YouTubeDownloader {
    /// Create a downloader from configuration.
    pub fn new(config: &YouTubeConfig, show_progress: bool) -> Result<Self> {
        Ok(Self {
            ytdlp_path: config.ytdlp_path.clone(),
            client: build_http_client(DEFAULT_USER_AGENT, config.timeout_seconds)?,
            show_progress,
        })
    }

    /// Resolve the available streams for a URL.
    pub async fn resolve(&self, url: &str) -> Result<VideoInfo> {
        tracing::debug!("Resolving streams with {} for {}", self.ytdlp_path, url);

        let output = Command::new(&self.ytdlp_path)
            .args(["--dump-json", "--no-playlist", "--no-warnings", url])
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::Download(format!(
                        "yt-dlp not found at '{}'. Install yt-dlp or set youtube.ytdlp_path.",
                        self.ytdlp_path
                    ))
                } else {
                    Error::Download(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Download(format!(
                "Could not resolve video: {}",
                stderr.trim()
            )));
        }

        parse_video_info(&output.stdout)
    }
}

#[async_trait]
impl PlatformDownloader for YouTubeDownloader {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    async fn download(&self, url: &str, target: &DownloadTarget) -> Result<PathBuf> {
        let spinner = self
            .show_progress
            .then(|| create_spinner("Resolving video streams..."));
        let resolved = self.resolve(url).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        let info = resolved?;

        let stream = select_progressive(&info.formats).ok_or_else(|| {
            Error::Download(format!("No progressive mp4 stream available for video {}", info.id))
        })?;
        let stream_url = stream
            .url
            .as_deref()
            .ok_or_else(|| Error::Download("Selected stream has no URL".into()))?;

        tracing::info!(
            "Downloading '{}' format {} ({}p)",
            info.title.as_deref().unwrap_or(&info.id),
            stream.format_id,
            stream.height.unwrap_or(0)
        );

        let response = self
            .client
            .get(stream_url)
            .headers(header_map(&stream.http_headers))
            .send()
            .await
            .map_err(|e| Error::Download(format!("Stream request failed: {}", e)))?;

        save_response(response, &target.path(), self.show_progress).await
    }
}

/// Convert yt-dlp's per-format headers, skipping any that are not valid HTTP.
fn header_map(headers: &HashMap<String, String>) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                map.insert(name, value);
            }
            _ => tracing::debug!("Skipping invalid stream header {}", name),
        }
    }
    map
}
