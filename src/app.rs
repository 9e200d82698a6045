//! Application session: the actions behind the Download, Browse and Export screens.

use std::path::PathBuf;

use crate::config::Config;
use crate::download::{DispatchOutcome, Dispatcher, DownloadRequest};
use crate::error::{Error, Result};
use crate::export::export_to_xlsx;
use crate::fs::{expand_path, is_valid_path, list_files, FileEntry};
use crate::history::History;
use crate::platform::{InstagramDownloader, YouTubeDownloader};

/// One user session: configuration, dispatcher and the session history.
pub struct App {
    config: Config,
    dispatcher: Dispatcher,
    history: History,
}

impl App {
    /// Start a session with the real platform downloaders.
    pub fn new(config: Config) -> Result<Self> {
        let show_progress = config.options.show_progress;
        let dispatcher = Dispatcher::new(
            Box::new(YouTubeDownloader::new(&config.youtube, show_progress)?),
            Box::new(InstagramDownloader::new(&config.instagram, show_progress)?),
        );
        Ok(Self::with_dispatcher(config, dispatcher))
    }

    /// Start a session with a custom dispatcher.
    pub fn with_dispatcher(config: Config, dispatcher: Dispatcher) -> Self {
        Self {
            config,
            dispatcher,
            history: History::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Download screen: run one request.
    pub async fn download(&mut self, request: &DownloadRequest) -> DispatchOutcome {
        self.dispatcher.submit(request, &mut self.history).await
    }

    /// Browse screen: list the files in a directory.
    pub fn scan(&self, path: &str) -> Result<Vec<FileEntry>> {
        let dir = expand_path(path);
        if path.trim().is_empty() || !is_valid_path(&dir) {
            return Err(Error::InvalidInput(
                "Invalid path. Please enter a valid directory path.".into(),
            ));
        }
        list_files(&dir)
    }

    /// Export screen: write the session history to a spreadsheet.
    pub fn export_history(&self, export_path: &str) -> Result<PathBuf> {
        let to = valid_export_dir(export_path)?;
        if self.history.is_empty() {
            return Err(Error::Export("No download history to export".into()));
        }
        export_to_xlsx(self.history.records(), &to)
    }

    /// Export screen: write a directory listing to a spreadsheet.
    pub fn export_directory(&self, directory: &str, export_path: &str) -> Result<PathBuf> {
        let to = valid_export_dir(export_path)?;

        let from = expand_path(directory);
        if directory.trim().is_empty() || !is_valid_path(&from) {
            return Err(Error::InvalidInput("Invalid directory path".into()));
        }

        let files = list_files(&from)?;
        if files.is_empty() {
            return Err(Error::Export(format!("No files found in {}", from.display())));
        }
        export_to_xlsx(&files, &to)
    }
}

fn valid_export_dir(export_path: &str) -> Result<PathBuf> {
    let to = expand_path(export_path);
    if export_path.trim().is_empty() || !is_valid_path(&to) {
        return Err(Error::InvalidInput(
            "Invalid export path. Please enter a valid directory path.".into(),
        ));
    }
    Ok(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Platform, PlatformSelector};
    use crate::platform::{DownloadTarget, PlatformDownloader};
    use async_trait::async_trait;
    use std::path::Path;

    struct WritingDownloader(Platform);

    #[async_trait]
    impl PlatformDownloader for WritingDownloader {
        fn platform(&self) -> Platform {
            self.0
        }

        async fn download(&self, _url: &str, target: &DownloadTarget) -> Result<PathBuf> {
            let path = target.path();
            std::fs::write(&path, b"video")?;
            Ok(path)
        }
    }

    fn app() -> App {
        let dispatcher = Dispatcher::new(
            Box::new(WritingDownloader(Platform::YouTube)),
            Box::new(WritingDownloader(Platform::Instagram)),
        );
        App::with_dispatcher(Config::default(), dispatcher)
    }

    fn s(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_instagram_scenario() {
        let root = tempfile::tempdir().unwrap();
        let dl = root.path().join("dl");
        std::fs::create_dir(&dl).unwrap();

        let mut app = app();
        let request = DownloadRequest::new(
            "https://instagram.com/p/xyz",
            "My Video",
            s(&dl),
            PlatformSelector::Instagram,
        );
        let outcome = app.download(&request).await;

        assert!(outcome.is_success(), "{}", outcome.message);
        assert!(dl.join("My Video.mp4").exists());

        let record = app.history().last().unwrap();
        assert_eq!(record.filename, "My Video.mp4");
        assert_eq!(record.source, Platform::Instagram);
        assert_eq!(record.path, dl.join("My Video.mp4"));
    }

    #[test]
    fn test_scan_invalid_path() {
        let root = tempfile::tempdir().unwrap();
        let err = app().scan(&s(&root.path().join("nope"))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid path. Please enter a valid directory path.");
    }

    #[test]
    fn test_export_empty_history() {
        let root = tempfile::tempdir().unwrap();
        let err = app().export_history(&s(root.path())).unwrap_err();
        assert!(matches!(err, Error::Export(_)));
        assert!(std::fs::read_dir(root.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_export_history_checks_path_before_history() {
        let root = tempfile::tempdir().unwrap();
        let err = app()
            .export_history(&s(&root.path().join("missing")))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid export path. Please enter a valid directory path."
        );
    }

    #[tokio::test]
    async fn test_export_history_after_download() {
        let root = tempfile::tempdir().unwrap();
        let mut app = app();
        let request = DownloadRequest::new(
            "https://youtu.be/abc123",
            "clip",
            s(root.path()),
            PlatformSelector::AutoDetect,
        );
        assert!(app.download(&request).await.is_success());

        let out = tempfile::tempdir().unwrap();
        let path = app.export_history(&s(out.path())).unwrap();
        assert!(path.starts_with(out.path()));
        assert!(path.exists());
    }

    #[test]
    fn test_export_directory_checks() {
        let root = tempfile::tempdir().unwrap();
        let empty = root.path().join("empty");
        std::fs::create_dir(&empty).unwrap();
        let app = app();

        let err = app
            .export_directory(&s(&empty), &s(&root.path().join("missing")))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid export path. Please enter a valid directory path."
        );

        let err = app
            .export_directory(&s(&root.path().join("missing")), &s(root.path()))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid directory path");

        let err = app.export_directory(&s(&empty), &s(root.path())).unwrap_err();
        assert!(matches!(err, Error::Export(_)));
    }

    #[test]
    fn test_export_directory_listing() {
        let src = tempfile::tempdir().unwrap();
        std::fs::write(src.path().join("a.mp4"), b"1").unwrap();
        std::fs::write(src.path().join("b.mp4"), b"2").unwrap();

        let out = tempfile::tempdir().unwrap();
        let path = app().export_directory(&s(src.path()), &s(out.path())).unwrap();
        assert!(path.exists());
    }
}
