//! Error types.

mod download_error;
mod network_error;
mod storage_error;

pub use download_error::DownloadError;
pub use network_error::NetworkError;
pub use storage_error::StorageError;
