//! Download dispatching: validation, platform routing and history recording.

use std::fmt;
use std::path::PathBuf;

use crate::config::{Platform, PlatformSelector};
use crate::error::{Error, Result};
use crate::fs::{expand_path, is_valid_path, sanitize_filename};
use crate::history::{DownloadRecord, History};
use crate::platform::{DownloadTarget, PlatformDownloader};

/// A single download request as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    /// Desired name without extension.
    pub filename: String,
    /// Output directory as typed (`~` allowed).
    pub output_path: String,
    pub platform: PlatformSelector,
}

impl DownloadRequest {
    pub fn new(
        url: impl Into<String>,
        filename: impl Into<String>,
        output_path: impl Into<String>,
        platform: PlatformSelector,
    ) -> Self {
        Self {
            url: url.into(),
            filename: filename.into(),
            output_path: output_path.into(),
            platform,
        }
    }
}

/// Where a request is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Idle,
    Validating,
    Downloading(Platform),
    Recorded,
    Failed,
}

impl fmt::Display for DispatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchState::Idle => write!(f, "idle"),
            DispatchState::Validating => write!(f, "validating"),
            DispatchState::Downloading(platform) => write!(f, "downloading ({})", platform),
            DispatchState::Recorded => write!(f, "recorded"),
            DispatchState::Failed => write!(f, "failed"),
        }
    }
}

/// User-facing result of one request.
#[derive(Debug)]
pub struct DispatchOutcome {
    /// Terminal state: `Recorded` or `Failed`.
    pub state: DispatchState,
    pub message: String,
    pub record: Option<DownloadRecord>,
    pub error: Option<Error>,
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        self.state == DispatchState::Recorded
    }
}

/// Validated inputs ready for a downloader.
#[derive(Debug)]
struct ValidatedRequest {
    platform: Platform,
    target: DownloadTarget,
}

/// Routes download requests to the platform downloaders.
pub struct Dispatcher {
    youtube: Box<dyn PlatformDownloader>,
    instagram: Box<dyn PlatformDownloader>,
}

impl Dispatcher {
    /// Create a dispatcher from one downloader per platform.
    pub fn new(
        youtube: Box<dyn PlatformDownloader>,
        instagram: Box<dyn PlatformDownloader>,
    ) -> Self {
        Self { youtube, instagram }
    }

    fn downloader(&self, platform: Platform) -> &dyn PlatformDownloader {
        match platform {
            Platform::YouTube => self.youtube.as_ref(),
            Platform::Instagram => self.instagram.as_ref(),
        }
    }

    /// Run a request and turn the result into a user-facing outcome.
    pub async fn submit(&self, request: &DownloadRequest, history: &mut History) -> DispatchOutcome {
        match self.dispatch(request, history).await {
            Ok(record) => DispatchOutcome {
                state: DispatchState::Recorded,
                message: format!("Downloaded: {}", record.filename),
                record: Some(record),
                error: None,
            },
            Err(e) => DispatchOutcome {
                state: DispatchState::Failed,
                message: e.to_string(),
                record: None,
                error: Some(e),
            },
        }
    }

    /// Validate, route and download one request.
    ///
    /// On success exactly one record is appended to `history`; on any
    /// failure `history` is left untouched.
    pub async fn dispatch(
        &self,
        request: &DownloadRequest,
        history: &mut History,
    ) -> Result<DownloadRecord> {
        let mut state = DispatchState::Idle;
        transition(&mut state, DispatchState::Validating);

        let validated = match validate(request) {
            Ok(v) => v,
            Err(e) => {
                transition(&mut state, DispatchState::Failed);
                return Err(e);
            }
        };

        transition(&mut state, DispatchState::Downloading(validated.platform));
        let downloader = self.downloader(validated.platform);
        tracing::debug!(
            "Routing {} to the {} downloader",
            request.url.trim(),
            downloader.platform()
        );

        let written = match downloader.download(request.url.trim(), &validated.target).await {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("{} download failed: {}", validated.platform, e);
                transition(&mut state, DispatchState::Failed);
                return Err(e);
            }
        };

        let record = DownloadRecord::new(
            validated.target.filename.clone(),
            validated.platform,
            request.url.trim().to_string(),
            absolute(written),
        );
        history.push(record.clone());
        transition(&mut state, DispatchState::Recorded);

        tracing::info!("Downloaded {} to {}", record.filename, record.path.display());
        Ok(record)
    }
}

fn transition(state: &mut DispatchState, next: DispatchState) {
    tracing::debug!("Dispatch: {} -> {}", state, next);
    *state = next;
}

/// Check the request fields and pick the platform.
fn validate(request: &DownloadRequest) -> Result<ValidatedRequest> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(Error::InvalidInput("Please enter a URL".into()));
    }

    if sanitize_filename(&request.filename).trim().is_empty() {
        return Err(Error::InvalidInput("Please enter a filename".into()));
    }

    let directory = expand_path(&request.output_path);
    if request.output_path.trim().is_empty() || !is_valid_path(&directory) {
        return Err(Error::InvalidInput(
            "Invalid download path. Please enter a valid directory path.".into(),
        ));
    }

    let platform = request
        .platform
        .resolve(url)
        .ok_or_else(|| Error::UnknownPlatform(url.to_string()))?;

    Ok(ValidatedRequest {
        platform,
        target: DownloadTarget::new(&directory, &request.filename),
    })
}

fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        expand_path(&path.to_string_lossy())
    }
}
