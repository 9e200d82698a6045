//! Configuration structures and loading logic.

use crate::config::modes::PlatformSelector;
use crate::error::{Error, Result};
use crate::fs::paths::{default_download_dir, expand_path};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub youtube: YouTubeConfig,

    #[serde(default)]
    pub instagram: InstagramConfig,
}

/// General options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Directory videos are saved into when none is given.
    #[serde(default)]
    pub download_directory: Option<String>,

    /// Directory spreadsheets are written to when none is given.
    #[serde(default)]
    pub export_directory: Option<String>,

    /// Platform selection used when a request does not name one.
    #[serde(default)]
    pub default_platform: PlatformSelector,

    /// Whether to show download progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            export_directory: None,
            default_platform: PlatformSelector::default(),
            show_progress: true,
        }
    }
}

/// YouTube stream resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeConfig {
    /// Path or name of the yt-dlp executable.
    #[serde(default = "default_ytdlp_path")]
    pub ytdlp_path: String,

    /// Connection timeout in seconds for the stream transfer.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            ytdlp_path: default_ytdlp_path(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Instagram GraphQL client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramConfig {
    /// GraphQL persisted query id for shortcode lookups (rotates periodically).
    #[serde(default = "default_doc_id")]
    pub doc_id: String,

    /// Instagram web app id.
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// Browser user agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout in seconds for connecting and for the GraphQL query.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for InstagramConfig {
    fn default() -> Self {
        Self {
            doc_id: default_doc_id(),
            app_id: default_app_id(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_ytdlp_path() -> String {
    "yt-dlp".to_string()
}

fn default_doc_id() -> String {
    "8845758582119845".to_string()
}

fn default_app_id() -> String {
    "936619743392459".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    60
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .as_deref()
            .map(expand_path)
            .unwrap_or_else(default_download_dir)
    }

    /// Get the effective export directory (defaults to the download directory).
    pub fn export_directory(&self) -> PathBuf {
        self.options
            .export_directory
            .as_deref()
            .map(expand_path)
            .unwrap_or_else(|| self.download_directory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.youtube.ytdlp_path, "yt-dlp");
        assert_eq!(config.options.default_platform, PlatformSelector::AutoDetect);
        assert!(config.options.show_progress);
    }

    #[test]
    fn test_parse_sections() {
        let config: Config = toml::from_str(
            r#"
            [options]
            download_directory = "/srv/videos"
            default_platform = "instagram"

            [youtube]
            ytdlp_path = "/usr/local/bin/yt-dlp"
            "#,
        )
        .unwrap();

        assert_eq!(config.download_directory(), PathBuf::from("/srv/videos"));
        assert_eq!(config.export_directory(), PathBuf::from("/srv/videos"));
        assert_eq!(config.options.default_platform, PlatformSelector::Instagram);
        assert_eq!(config.youtube.ytdlp_path, "/usr/local/bin/yt-dlp");
        assert_eq!(config.instagram.doc_id, default_doc_id());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vidgrab.toml");

        let mut config = Config::default();
        config.options.export_directory = Some("/tmp/exports".into());
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.options.export_directory.as_deref(), Some("/tmp/exports"));
        assert_eq!(loaded.instagram.app_id, config.instagram.app_id);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        assert!(matches!(Config::load(&path), Err(Error::Config(_))));
        assert!(Config::load_or_default(&path).is_ok());
    }
}
