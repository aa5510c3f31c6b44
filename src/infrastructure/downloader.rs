//! Full-resolution file downloads into the Pictures directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use directories::UserDirs;
use reqwest::Client;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::domain::errors::DownloadError;
use crate::domain::ports::DownloaderPort;

/// Subfolder under the Pictures directory that downloads land in.
pub const DOWNLOAD_FOLDER: &str = "UnsplashImages";

/// Downloads photo files into a fixed target directory.
///
/// One fetch, one write: no retry, no progress reporting. Outcome reporting
/// is the caller's business.
pub struct PictureDownloader {
    client: Client,
    target_dir: PathBuf,
}

impl PictureDownloader {
    /// Creates a downloader targeting `<Pictures>/UnsplashImages`.
    ///
    /// # Errors
    /// Returns error if no pictures directory exists or HTTP client creation
    /// fails.
    pub fn new() -> Result<Self, DownloadError> {
        let pictures = UserDirs::new()
            .and_then(|dirs| dirs.picture_dir().map(Path::to_path_buf))
            .ok_or(DownloadError::NoPicturesDir)?;
        Self::with_target_dir(pictures.join(DOWNLOAD_FOLDER))
    }

    /// Creates a downloader targeting an explicit directory.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_target_dir(target_dir: PathBuf) -> Result<Self, DownloadError> {
        let client = Client::builder()
            .user_agent(concat!("oxisplash/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| DownloadError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, target_dir })
    }

    fn file_name() -> String {
        format!("unsplash_{}.jpg", Utc::now().timestamp_millis())
    }
}

#[async_trait]
impl DownloaderPort for PictureDownloader {
    async fn download(&self, url: &str) -> Result<PathBuf, DownloadError> {
        debug!(url, "Downloading image");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::network(format!("HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DownloadError::network(e.to_string()))?;

        fs::create_dir_all(&self.target_dir)
            .await
            .map_err(|e| DownloadError::io(e.to_string()))?;

        let path = self.target_dir.join(Self::file_name());
        let mut file = fs::File::create(&path)
            .await
            .map_err(|e| DownloadError::io(e.to_string()))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| DownloadError::io(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| DownloadError::io(e.to_string()))?;

        info!(path = %path.display(), size = bytes.len(), "Image saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_shape() {
        let name = PictureDownloader::file_name();
        assert!(name.starts_with("unsplash_"));
        assert!(name.ends_with(".jpg"));

        let stamp = &name["unsplash_".len()..name.len() - ".jpg".len()];
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_with_target_dir_keeps_directory() {
        let downloader =
            PictureDownloader::with_target_dir(PathBuf::from("/tmp/oxisplash-test")).unwrap();
        assert_eq!(downloader.target_dir, PathBuf::from("/tmp/oxisplash-test"));
    }
}
