//! Domain layer with core entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Live-query plumbing.
pub mod live;
/// Port definitions.
pub mod ports;

pub use entities::{AuthorSummary, FavoriteRecord, Image, ImageUrls, SearchResults};
pub use errors::{DownloadError, NetworkError, StorageError};
pub use ports::{DownloaderPort, FavoriteStorePort, NotificationPort, PhotoApiPort};
