//! Image repository composing the remote API and the local favorites table.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::domain::entities::{FavoriteRecord, Image, SearchResults};
use crate::domain::errors::{NetworkError, StorageError};
use crate::domain::live::map_watch;
use crate::domain::ports::{FavoriteStorePort, PhotoApiPort};

/// The single component touching both the remote API and the local store.
///
/// Translates between wire records, storage records, and domain records, and
/// never panics past its boundary — every fallible call returns a `Result`.
#[derive(Clone)]
pub struct ImageRepository {
    api: Arc<dyn PhotoApiPort>,
    store: Arc<dyn FavoriteStorePort>,
}

impl ImageRepository {
    /// Creates a repository over the given ports.
    #[must_use]
    pub fn new(api: Arc<dyn PhotoApiPort>, store: Arc<dyn FavoriteStorePort>) -> Self {
        Self { api, store }
    }

    /// Fetches one page of the photo listing.
    ///
    /// Does not consult the local store: the favorite flag on listing results
    /// is not merged in here.
    ///
    /// # Errors
    /// Returns the remote call's error unchanged.
    pub async fn get_images(&self, page: u32) -> Result<Vec<Image>, NetworkError> {
        debug!(page, "Fetching photo listing");
        self.api.list_photos(page).await
    }

    /// Runs a free-text search.
    ///
    /// # Errors
    /// Returns the remote call's error unchanged.
    pub async fn search_images(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResults, NetworkError> {
        debug!(query, page, "Searching photos");
        self.api.search_photos(query, page).await
    }

    /// Persists a photo as favorite.
    ///
    /// # Errors
    /// Returns a [`StorageError`] if the upsert fails.
    pub async fn favorite_image(&self, image: &Image) -> Result<(), StorageError> {
        debug!(id = image.id(), "Favoriting photo");
        self.store
            .upsert_favorite(FavoriteRecord::from_image(image))
            .await
    }

    /// Removes a photo from the favorites. Matched by id only.
    ///
    /// # Errors
    /// Returns a [`StorageError`] if the delete fails.
    pub async fn unfavorite_image(&self, id: &str) -> Result<(), StorageError> {
        debug!(id, "Unfavoriting photo");
        self.store.delete_favorite(id).await
    }

    /// Live sequence of favorited photos, reconstructed from storage rows.
    #[must_use]
    pub fn favorite_images(&self) -> watch::Receiver<Vec<Image>> {
        map_watch(self.store.all_favorites(), |records| {
            records
                .iter()
                .cloned()
                .map(FavoriteRecord::into_image)
                .collect()
        })
    }

    /// Live favorite flag for one id.
    #[must_use]
    pub fn is_image_favorite(&self, id: &str) -> watch::Receiver<bool> {
        self.store.is_favorite(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AuthorSummary, ImageUrls};
    use crate::domain::ports::mocks::{MemoryFavoriteStore, MockPhotoApi};

    fn sample_image(id: &str) -> Image {
        Image::new(
            id,
            ImageUrls {
                raw: format!("https://images.unsplash.com/{id}?raw"),
                full: format!("https://images.unsplash.com/{id}?full"),
                regular: format!("https://images.unsplash.com/{id}?regular"),
                small: format!("https://images.unsplash.com/{id}?small"),
                thumb: format!("https://images.unsplash.com/{id}?thumb"),
            },
            format!("https://unsplash.com/photos/{id}/download"),
            AuthorSummary {
                id: "u1".into(),
                name: "Test Author".into(),
                username: "tester".into(),
                avatar_url: "https://example.com/avatar.jpg".into(),
            },
        )
    }

    fn repository_with_store() -> (ImageRepository, Arc<MemoryFavoriteStore>) {
        let store = Arc::new(MemoryFavoriteStore::new());
        let repository = ImageRepository::new(Arc::new(MockPhotoApi::new()), store.clone());
        (repository, store)
    }

    #[tokio::test]
    async fn test_favorite_then_flag_observes_true() {
        let (repository, _store) = repository_with_store();
        let image = sample_image("abc123");

        repository.favorite_image(&image).await.unwrap();

        let flag = repository.is_image_favorite("abc123");
        assert!(*flag.borrow());
    }

    #[tokio::test]
    async fn test_unfavorite_then_flag_observes_false() {
        let (repository, _store) = repository_with_store();
        let image = sample_image("abc123");

        repository.favorite_image(&image).await.unwrap();
        repository.unfavorite_image("abc123").await.unwrap();

        let flag = repository.is_image_favorite("abc123");
        assert!(!*flag.borrow());
    }

    #[tokio::test]
    async fn test_repeated_favorite_keeps_single_row() {
        let (repository, store) = repository_with_store();
        let image = sample_image("abc123");

        repository.favorite_image(&image).await.unwrap();
        repository.favorite_image(&image).await.unwrap();
        repository.favorite_image(&image).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(repository.favorite_images().borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_favorites_length_tracks_distinct_ids() {
        let (repository, _store) = repository_with_store();

        repository.favorite_image(&sample_image("a")).await.unwrap();
        repository.favorite_image(&sample_image("b")).await.unwrap();
        repository.favorite_image(&sample_image("c")).await.unwrap();
        repository.unfavorite_image("b").await.unwrap();

        assert_eq!(repository.favorite_images().borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_round_trip_preserves_urls_author_and_download_link() {
        let (repository, _store) = repository_with_store();
        let image = sample_image("abc123")
            .with_description("A photo")
            .with_dimensions(4000, 3000);

        repository.favorite_image(&image).await.unwrap();

        let favorites = repository.favorite_images();
        let restored = favorites.borrow().first().cloned().unwrap();
        assert_eq!(restored.id(), image.id());
        assert_eq!(restored.urls(), image.urls());
        assert_eq!(restored.download_url(), image.download_url());
        assert_eq!(restored.author(), image.author());
        assert!(restored.is_favorite());
    }

    #[tokio::test]
    async fn test_fresh_flag_subscription_observes_just_written_value() {
        let (repository, _store) = repository_with_store();

        repository
            .favorite_image(&sample_image("abc123"))
            .await
            .unwrap();

        // Fresh subscription, no unrelated write in between.
        assert!(*repository.is_image_favorite("abc123").borrow());
    }

    #[tokio::test]
    async fn test_live_favorites_re_emit_on_mutation() {
        let (repository, _store) = repository_with_store();
        let mut favorites = repository.favorite_images();
        assert!(favorites.borrow_and_update().is_empty());

        repository.favorite_image(&sample_image("a")).await.unwrap();
        favorites.changed().await.unwrap();
        assert_eq!(favorites.borrow_and_update().len(), 1);

        repository.unfavorite_image("a").await.unwrap();
        favorites.changed().await.unwrap();
        assert!(favorites.borrow_and_update().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_as_result() {
        let (repository, store) = repository_with_store();
        store.set_fail_writes(true);

        let result = repository.favorite_image(&sample_image("abc123")).await;
        assert!(matches!(result, Err(StorageError::Write { .. })));
    }
}
