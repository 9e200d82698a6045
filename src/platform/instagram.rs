//! Instagram downloader.
//!
//! Posts are resolved by shortcode through Instagram's public web GraphQL
//! endpoint, which answers anonymous requests for public posts. Only the
//! video file itself is written.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::{InstagramConfig, Platform};
use crate::download::transfer::save_response;
use crate::error::{Error, Result};
use crate::platform::{build_http_client, DownloadTarget, PlatformDownloader};

/// Instagram GraphQL API endpoint.
const GRAPHQL_ENDPOINT: &str = "https://www.instagram.com/api/graphql";

/// Route segments that precede the shortcode in post URLs.
const ROUTE_MARKERS: &[&str] = &["p", "reel", "reels", "tv"];

/// Extract the post shortcode from an Instagram URL.
///
/// Takes the first non-empty path segment, except that a leading route
/// marker (`p`, `reel`, `reels`, `tv`) is skipped and the segment after it
/// is used. Plain first-segment extraction would return `"p"` for the
/// common `/p/<code>/` form.
pub fn extract_shortcode(input: &str) -> Result<String> {
    let input = input.trim();
    let url = Url::parse(input)
        .or_else(|_| Url::parse(&format!("https://{}", input)))
        .map_err(|_| Error::InvalidUrl(input.to_string()))?;

    let mut segments = url.path().trim_matches('/').split('/').filter(|s| !s.is_empty());

    let shortcode = match segments.next() {
        Some(marker) if ROUTE_MARKERS.contains(&marker) => segments.next(),
        other => other,
    };

    shortcode
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidUrl(input.to_string()))
}

/// The parts of a resolved post needed to download it.
#[derive(Debug, Clone, PartialEq)]
pub struct InstagramPost {
    pub shortcode: String,
    pub is_video: bool,
    pub video_url: Option<String>,
    pub owner: Option<String>,
}

impl InstagramPost {
    /// The direct video URL, or `NotAVideo` for photo and carousel posts.
    pub fn video_url(&self) -> Result<&str> {
        if !self.is_video {
            return Err(Error::NotAVideo(self.shortcode.clone()));
        }
        self.video_url
            .as_deref()
            .ok_or_else(|| Error::Download(format!("Post {} has no video URL", self.shortcode)))
    }
}

/// Read a post out of a GraphQL shortcode query response.
pub fn parse_post(shortcode: &str, body: &Value) -> Result<InstagramPost> {
    let media = body
        .pointer("/data/xdt_shortcode_media")
        .or_else(|| body.pointer("/data/shortcode_media"))
        .filter(|m| !m.is_null())
        .ok_or_else(|| {
            let message = body.pointer("/message").and_then(Value::as_str).unwrap_or("");
            if message.contains("login_required") || message.contains("checkpoint_required") {
                Error::Download("Private account or login required".into())
            } else {
                Error::Download(format!("Post {} not found or unavailable", shortcode))
            }
        })?;

    Ok(InstagramPost {
        shortcode: shortcode.to_string(),
        is_video: media.get("is_video").and_then(Value::as_bool).unwrap_or(false),
        video_url: media
            .get("video_url")
            .and_then(Value::as_str)
            .map(String::from),
        owner: media
            .pointer("/owner/username")
            .and_then(Value::as_str)
            .map(String::from),
    })
}

/// Downloads Instagram videos by shortcode.
pub struct InstagramDownloader {
    client: Client,
    endpoint: String,
    doc_id: String,
    app_id: String,
    query_timeout: Duration,
    show_progress: bool,
}

impl InstagramDownloader {
    /// Create a downloader from configuration.
    pub fn new(config: &InstagramConfig, show_progress: bool) -> Result<Self> {
        Ok(Self {
            client: build_http_client(&config.user_agent, config.timeout_seconds)?,
            endpoint: GRAPHQL_ENDPOINT.to_string(),
            doc_id: config.doc_id.clone(),
            app_id: config.app_id.clone(),
            query_timeout: Duration::from_secs(config.timeout_seconds),
            show_progress,
        })
    }

    /// Resolve a post by shortcode.
    pub async fn fetch_post(&self, shortcode: &str) -> Result<InstagramPost> {
        let variables = serde_json::json!({ "shortcode": shortcode }).to_string();
        tracing::debug!("Fetching Instagram post {}", shortcode);

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.query_timeout)
            .header("X-IG-App-ID", &self.app_id)
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Referer", "https://www.instagram.com/")
            .header("Origin", "https://www.instagram.com")
            .form(&[("doc_id", self.doc_id.as_str()), ("variables", variables.as_str())])
            .send()
            .await
            .map_err(|e| Error::Download(format!("GraphQL request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download(format!("GraphQL HTTP {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Download(format!("Failed to read GraphQL response: {}", e)))?;
        let body: Value = serde_json::from_str(&text).map_err(|e| {
            let preview: String = text.chars().take(300).collect();
            tracing::debug!("Non-JSON GraphQL response: {}", preview);
            Error::Download(format!("Failed to parse GraphQL response: {}", e))
        })?;

        parse_post(shortcode, &body)
    }
}

#[async_trait]
impl PlatformDownloader for InstagramDownloader {
    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    async fn download(&self, url: &str, target: &DownloadTarget) -> Result<PathBuf> {
        let shortcode = extract_shortcode(url)?;
        let post = self.fetch_post(&shortcode).await?;
        let video_url = post.video_url()?;

        tracing::info!(
            "Downloading Instagram video {} by {}",
            shortcode,
            post.owner.as_deref().unwrap_or("unknown")
        );

        let response = self
            .client
            .get(video_url)
            .send()
            .await
            .map_err(|e| Error::Download(format!("Failed to download media: {}", e)))?;

        save_response(response, &target.path(), self.show_progress).await
    }
}
