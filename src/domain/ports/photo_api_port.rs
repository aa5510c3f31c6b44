//! Remote photo API port definition.

use async_trait::async_trait;

use crate::domain::entities::{Image, SearchResults};
use crate::domain::errors::NetworkError;

/// Port for the remote photo API.
///
/// Pages are 1-based; the page size is fixed by the adapter. A failed call
/// surfaces immediately — no retries, no backoff.
#[async_trait]
pub trait PhotoApiPort: Send + Sync {
    /// Fetches one page of the photo listing.
    async fn list_photos(&self, page: u32) -> Result<Vec<Image>, NetworkError>;

    /// Runs a free-text search and returns one page of hits plus totals.
    async fn search_photos(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResults, NetworkError>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use super::*;

    /// Mock photo API serving canned pages and counting calls.
    #[derive(Default)]
    pub struct MockPhotoApi {
        pages: Mutex<HashMap<u32, Vec<Image>>>,
        search_results: Mutex<SearchResults>,
        fail: AtomicBool,
        list_calls: AtomicUsize,
        search_calls: AtomicUsize,
        last_search: Mutex<Option<(String, u32)>>,
    }

    impl MockPhotoApi {
        /// Creates an empty mock.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Serves `images` for listing `page`.
        #[must_use]
        pub fn with_page(self, page: u32, images: Vec<Image>) -> Self {
            self.pages.lock().insert(page, images);
            self
        }

        /// Serves `results` for any search call.
        #[must_use]
        pub fn with_search_results(self, results: SearchResults) -> Self {
            *self.search_results.lock() = results;
            self
        }

        /// Makes every call fail with a transport error.
        pub fn set_fail(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        /// Number of listing calls made.
        pub fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        /// Number of search calls made.
        pub fn search_calls(&self) -> usize {
            self.search_calls.load(Ordering::SeqCst)
        }

        /// Query and page of the most recent search call.
        pub fn last_search(&self) -> Option<(String, u32)> {
            self.last_search.lock().clone()
        }
    }

    #[async_trait]
    impl PhotoApiPort for MockPhotoApi {
        async fn list_photos(&self, page: u32) -> Result<Vec<Image>, NetworkError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(NetworkError::transport("mock transport failure"));
            }
            Ok(self.pages.lock().get(&page).cloned().unwrap_or_default())
        }

        async fn search_photos(
            &self,
            query: &str,
            page: u32,
        ) -> Result<SearchResults, NetworkError> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_search.lock() = Some((query.to_string(), page));
            if self.fail.load(Ordering::SeqCst) {
                return Err(NetworkError::transport("mock transport failure"));
            }
            Ok(self.search_results.lock().clone())
        }
    }
}
