//! Download error types.

use thiserror::Error;

/// Failure while fetching or writing a full-resolution file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum DownloadError {
    #[error("download request failed: {message}")]
    Network { message: String },

    #[error("failed to write downloaded file: {message}")]
    Io { message: String },

    #[error("no pictures directory available")]
    NoPicturesDir,
}

impl DownloadError {
    /// Creates a network-side error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a filesystem-side error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}
