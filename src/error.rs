//! Error types for the vidgrab application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Request errors
    #[error("{0}")]
    InvalidInput(String),

    #[error("Could not detect platform from URL: {0}")]
    UnknownPlatform(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error("Invalid Instagram URL: {0}")]
    InvalidUrl(String),

    #[error("The Instagram post is not a video: {0}")]
    NotAVideo(String),

    // Export errors
    #[error("Export failed: {0}")]
    Export(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                exit_codes::CONFIG_ERROR
            }
            Error::InvalidInput(_) | Error::UnknownPlatform(_) | Error::InvalidUrl(_) => {
                exit_codes::INVALID_INPUT
            }
            Error::Download(_) | Error::NotAVideo(_) => exit_codes::DOWNLOAD_ERROR,
            Error::Export(_) | Error::Xlsx(_) => exit_codes::EXPORT_ERROR,
            Error::Io(_) => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const DOWNLOAD_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const INVALID_INPUT: i32 = 4;
    pub const EXPORT_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}
