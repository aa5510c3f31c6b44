//! Image download port definition.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::errors::DownloadError;

/// Port for fetching a photo's full-resolution file to local storage.
#[async_trait]
pub trait DownloaderPort: Send + Sync {
    /// Downloads the file at `url` and returns the written path.
    async fn download(&self, url: &str) -> Result<PathBuf, DownloadError>;
}
