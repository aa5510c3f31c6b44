//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Full-resolution file downloads.
pub mod downloader;
/// System notifications.
pub mod notifications;
/// Local favorites storage.
pub mod store;
/// Unsplash API client.
pub mod unsplash;

pub use config::{AppConfig, CliArgs, Command, LogLevel, StorageManager};
pub use downloader::{DOWNLOAD_FOLDER, PictureDownloader};
pub use notifications::DesktopNotificationService;
pub use store::SqliteFavoriteStore;
pub use unsplash::{PHOTOS_PER_PAGE, UnsplashClient};
