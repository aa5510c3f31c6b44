//! Favorite store port definition.

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::entities::FavoriteRecord;
use crate::domain::errors::StorageError;

/// Port for the local favorites table.
///
/// The two query methods are live: the returned receiver carries the current
/// value immediately and re-emits on every table mutation.
#[async_trait]
pub trait FavoriteStorePort: Send + Sync {
    /// Inserts or replaces the row for `record.id`.
    async fn upsert_favorite(&self, record: FavoriteRecord) -> Result<(), StorageError>;

    /// Deletes the row with the given id. No-op if absent.
    async fn delete_favorite(&self, id: &str) -> Result<(), StorageError>;

    /// Live snapshot of all favorite rows, re-emitted on any mutation.
    fn all_favorites(&self) -> watch::Receiver<Vec<FavoriteRecord>>;

    /// Live flag for one id, re-emitted when its row appears or disappears.
    fn is_favorite(&self, id: &str) -> watch::Receiver<bool>;
}
