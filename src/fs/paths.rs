//! Path validation and expansion.

use std::path::{Path, PathBuf};

use directories::{BaseDirs, UserDirs};

/// Check whether a path exists right now (file or directory).
///
/// The answer is advisory: the path may disappear before it is used.
pub fn is_valid_path(path: &Path) -> bool {
    path.exists()
}

/// Expand a user supplied path string.
///
/// Trims whitespace, expands a leading `~` to the home directory and makes
/// relative paths absolute against the current directory.
pub fn expand_path(input: &str) -> PathBuf {
    let input = input.trim();

    let expanded = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => {
            match BaseDirs::new() {
                Some(dirs) => dirs
                    .home_dir()
                    .join(rest.trim_start_matches(['/', '\\'])),
                None => PathBuf::from(input),
            }
        }
        _ => PathBuf::from(input),
    };

    if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    }
}

/// The user's Downloads directory, or `~/Downloads`, or the current directory.
pub fn default_download_dir() -> PathBuf {
    if let Some(dir) = UserDirs::new().and_then(|u| u.download_dir().map(Path::to_path_buf)) {
        return dir;
    }

    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join("Downloads"),
        None => PathBuf::from("."),
    }
}
