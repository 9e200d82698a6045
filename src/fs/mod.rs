//! Filesystem module.
//!
//! Provides:
//! - Filename sanitizing and generation
//! - Path validation and expansion
//! - Directory listing

pub mod listing;
pub mod naming;
pub mod paths;

pub use listing::{list_files, FileEntry};
pub use naming::{
    export_filename, make_unique_filename, sanitize_filename, video_filename, VIDEO_EXTENSION,
};
pub use paths::{default_download_dir, expand_path, is_valid_path};
