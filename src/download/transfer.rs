//! Streaming an HTTP response body to a file.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::Response;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::output::create_download_bar;

/// Minimum body size to show a progress bar (1 MB).
const PROGRESS_THRESHOLD: u64 = 1024 * 1024;

/// Write a response body to `output_path`.
///
/// The body is streamed into a hidden `.part` file next to the target and
/// renamed into place only once complete, so a failed transfer never leaves
/// a file at `output_path`.
pub async fn save_response(
    response: Response,
    output_path: &Path,
    show_progress: bool,
) -> Result<PathBuf> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Download(format!("Stream request returned HTTP {}", status)));
    }

    let temp_path = part_path(output_path)?;
    let label = output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let result = stream_to_file(response, &temp_path, &label, show_progress).await;

    match result {
        Ok(bytes) => {
            fs::rename(&temp_path, output_path).await.map_err(|e| {
                Error::Download(format!(
                    "Failed to move download into {}: {}",
                    output_path.display(),
                    e
                ))
            })?;
            tracing::debug!("Wrote {} bytes to {}", bytes, output_path.display());
            Ok(output_path.to_path_buf())
        }
        Err(e) => {
            let _ = fs::remove_file(&temp_path).await;
            Err(e)
        }
    }
}

/// Hidden temporary sibling of the target file.
fn part_path(output_path: &Path) -> Result<PathBuf> {
    let parent = output_path
        .parent()
        .ok_or_else(|| Error::Download("Output path has no parent directory".into()))?;
    let name = output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(parent.join(format!(".{}.{}.part", name, uuid::Uuid::new_v4())))
}

async fn stream_to_file(
    response: Response,
    path: &Path,
    label: &str,
    show_progress: bool,
) -> Result<u64> {
    let content_length = response.content_length();
    let progress = if show_progress && content_length.map_or(false, |l| l > PROGRESS_THRESHOLD) {
        Some(create_download_bar(content_length.unwrap_or(0), label))
    } else {
        None
    };

    let mut file = File::create(path).await.map_err(|e| {
        Error::Download(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| Error::Download(format!("Error writing to file: {}", e)))?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush()
        .await
        .map_err(|e| Error::Download(format!("Failed to flush file: {}", e)))?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Reply, TestServer};

    fn dir_entries(dir: &Path) -> Vec<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    async fn fetch(reply: Reply) -> Response {
        let server = TestServer::bind().await;
        let url = server.url("/video.mp4");
        let _task = server.serve(vec![reply]);
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        client.get(url).send().await.unwrap()
    }

    #[tokio::test]
    async fn test_body_is_renamed_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("clip.mp4");

        let response = fetch(Reply::ok(b"video-bytes".to_vec())).await;
        let written = save_response(response, &target, false).await.unwrap();

        assert_eq!(written, target);
        assert_eq!(std::fs::read(&target).unwrap(), b"video-bytes");
        assert_eq!(dir_entries(dir.path()), vec!["clip.mp4".to_string()]);
    }

    #[tokio::test]
    async fn test_error_status_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("clip.mp4");

        let response = fetch(Reply::status(404, b"not found".to_vec())).await;
        let result = save_response(response, &target, false).await;

        assert!(matches!(result, Err(Error::Download(_))));
        assert!(dir_entries(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_interrupted_body_removes_part_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("clip.mp4");

        let response = fetch(Reply::truncated(b"partial".to_vec(), 1024)).await;
        let result = save_response(response, &target, false).await;

        assert!(matches!(result, Err(Error::Download(_))));
        assert!(!target.exists());
        assert!(dir_entries(dir.path()).is_empty());
    }

    #[test]
    fn test_part_path_is_hidden_sibling() {
        let part = part_path(Path::new("/tmp/dl/My Video.mp4")).unwrap();
        assert_eq!(part.parent(), Some(Path::new("/tmp/dl")));

        let name = part.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".My Video.mp4."));
        assert!(name.ends_with(".part"));
    }

    #[test]
    fn test_part_path_is_unique() {
        let target = Path::new("/tmp/dl/clip.mp4");
        assert_ne!(part_path(target).unwrap(), part_path(target).unwrap());
    }
}
