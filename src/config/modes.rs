//! Platform definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Video platforms a download can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    YouTube,
    Instagram,
}

impl Platform {
    /// Guess the platform from substrings of the URL (case-insensitive).
    pub fn detect(url: &str) -> Option<Platform> {
        let url = url.to_lowercase();
        if url.contains("youtube") || url.contains("youtu.be") {
            Some(Platform::YouTube)
        } else if url.contains("instagram") || url.contains("insta.gr") {
            Some(Platform::Instagram)
        } else {
            None
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::YouTube => write!(f, "YouTube"),
            Platform::Instagram => write!(f, "Instagram"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "youtube" | "yt" => Ok(Platform::YouTube),
            "instagram" | "ig" => Ok(Platform::Instagram),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

/// Platform choice made on a download request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformSelector {
    #[serde(rename = "youtube")]
    YouTube,
    #[serde(rename = "instagram")]
    Instagram,
    /// Infer the platform from the URL (default).
    #[default]
    #[serde(rename = "auto-detect", alias = "auto")]
    AutoDetect,
}

impl PlatformSelector {
    /// All selectors in menu order.
    pub const ALL: [PlatformSelector; 3] = [
        PlatformSelector::YouTube,
        PlatformSelector::Instagram,
        PlatformSelector::AutoDetect,
    ];

    /// Resolve the selector against a URL.
    ///
    /// Explicit selectors ignore the URL content.
    pub fn resolve(&self, url: &str) -> Option<Platform> {
        match self {
            PlatformSelector::YouTube => Some(Platform::YouTube),
            PlatformSelector::Instagram => Some(Platform::Instagram),
            PlatformSelector::AutoDetect => Platform::detect(url),
        }
    }
}

impl From<Platform> for PlatformSelector {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::YouTube => PlatformSelector::YouTube,
            Platform::Instagram => PlatformSelector::Instagram,
        }
    }
}

impl fmt::Display for PlatformSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformSelector::YouTube => write!(f, "YouTube"),
            PlatformSelector::Instagram => write!(f, "Instagram"),
            PlatformSelector::AutoDetect => write!(f, "Auto-detect"),
        }
    }
}

impl FromStr for PlatformSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" | "auto-detect" | "autodetect" => Ok(PlatformSelector::AutoDetect),
            other => other
                .parse::<Platform>()
                .map(PlatformSelector::from)
                .map_err(|_| format!("Unknown platform selection: {}", s)),
        }
    }
}
