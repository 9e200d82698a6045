//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, PlatformSelector};

/// YouTube and Instagram video downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "vidgrab",
    version,
    about = "Download YouTube and Instagram videos and export file lists to Excel",
    long_about = "A CLI tool to download videos from YouTube and Instagram by URL, browse \
                  downloaded files and export download lists to .xlsx spreadsheets.\n\n\
                  Run without a subcommand to start an interactive session."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, default_value = "vidgrab.toml", env = "VIDGRAB_CONFIG")]
    pub config: PathBuf,

    /// Default directory for downloads.
    #[arg(short = 'd', long = "directory", global = true)]
    pub download_directory: Option<String>,

    /// Default directory for exported spreadsheets.
    #[arg(long = "export-directory", global = true)]
    pub export_directory: Option<String>,

    /// Path to the yt-dlp executable.
    #[arg(long = "yt-dlp", env = "VIDGRAB_YTDLP")]
    pub ytdlp_path: Option<String>,

    /// Hide download progress bars.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available actions.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Download a single video.
    Download {
        /// Video URL.
        #[arg(short, long)]
        url: String,

        /// Desired filename (without extension).
        #[arg(short, long)]
        name: String,

        /// Output directory (defaults to the configured download directory).
        #[arg(short, long)]
        output: Option<String>,

        /// Platform to use.
        #[arg(short, long, value_enum)]
        platform: Option<PlatformArg>,
    },

    /// List the files in a directory.
    Browse {
        /// Directory to scan (defaults to the configured download directory).
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Export the files in a directory to an Excel spreadsheet.
    Export {
        /// Directory whose files are exported.
        #[arg(long)]
        from: Option<String>,

        /// Directory the spreadsheet is written to.
        #[arg(long)]
        to: Option<String>,
    },

    /// Start an interactive session (default).
    Session,
}

/// CLI platform argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlatformArg {
    /// Always use the YouTube downloader.
    Youtube,
    /// Always use the Instagram downloader.
    Instagram,
    /// Detect the platform from the URL.
    Auto,
}

impl From<PlatformArg> for PlatformSelector {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Youtube => PlatformSelector::YouTube,
            PlatformArg::Instagram => PlatformSelector::Instagram,
            PlatformArg::Auto => PlatformSelector::AutoDetect,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.download_directory {
            config.options.download_directory = Some(dir.clone());
        }

        if let Some(dir) = &self.export_directory {
            config.options.export_directory = Some(dir.clone());
        }

        if let Some(path) = &self.ytdlp_path {
            config.youtube.ytdlp_path = path.clone();
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_download() {
        let args = Args::parse_from([
            "vidgrab",
            "download",
            "--url",
            "https://youtu.be/abc123",
            "--name",
            "My Video",
            "--platform",
            "auto",
        ]);

        match args.command {
            Some(Command::Download { url, name, output, platform }) => {
                assert_eq!(url, "https://youtu.be/abc123");
                assert_eq!(name, "My Video");
                assert!(output.is_none());
                assert_eq!(
                    PlatformSelector::from(platform.unwrap()),
                    PlatformSelector::AutoDetect
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::parse_from(["vidgrab"]);
        assert!(args.command.is_none());
        assert_eq!(args.config, PathBuf::from("vidgrab.toml"));
    }

    #[test]
    fn test_merge_into_config() {
        let args = Args::parse_from(["vidgrab", "-q", "--directory", "/srv/dl", "browse"]);
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert!(!config.options.show_progress);
        assert_eq!(config.options.download_directory.as_deref(), Some("/srv/dl"));
        assert!(config.options.export_directory.is_none());
    }
}
