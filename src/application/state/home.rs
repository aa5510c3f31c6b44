//! Home screen state holder: paged listing plus free-text search.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::warn;

use super::scope::TaskScope;
use super::view_state::{ViewState, error_message};
use crate::application::repository::ImageRepository;
use crate::domain::entities::Image;

/// State holder for the home screen.
///
/// Publishes a [`ViewState`] over the accumulated photo grid. Paging forward
/// appends to the previous pages' results; starting a search (or clearing
/// one) resets to page 1 and replaces them. Dropping the holder aborts any
/// in-flight work.
pub struct HomeState {
    inner: Arc<Inner>,
    tasks: TaskScope,
}

struct Inner {
    repository: ImageRepository,
    state: watch::Sender<ViewState<Vec<Image>>>,
    query: Mutex<String>,
    page: AtomicU32,
    search_active: AtomicBool,
}

impl HomeState {
    /// Creates the holder and starts loading page 1.
    #[must_use]
    pub fn new(repository: ImageRepository) -> Self {
        let holder = Self {
            inner: Arc::new(Inner {
                repository,
                state: watch::Sender::new(ViewState::Loading),
                query: Mutex::new(String::new()),
                page: AtomicU32::new(1),
                search_active: AtomicBool::new(false),
            }),
            tasks: TaskScope::default(),
        };
        holder.load_images();
        holder
    }

    /// Subscribes to the published view state.
    #[must_use]
    pub fn state(&self) -> watch::Receiver<ViewState<Vec<Image>>> {
        self.inner.state.subscribe()
    }

    /// Current search query.
    #[must_use]
    pub fn search_query(&self) -> String {
        self.inner.query.lock().clone()
    }

    /// Fetches the current page and publishes the result.
    pub fn load_images(&self) {
        let inner = Arc::clone(&self.inner);
        self.tasks.spawn(async move { inner.load_images().await });
    }

    /// Advances to the next page and fetches it.
    pub fn load_next_page(&self) {
        self.inner.page.fetch_add(1, Ordering::SeqCst);
        self.load_images();
    }

    /// Updates the query. Clearing it while a search is active falls back to
    /// page 1 of the plain listing.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        let cleared = query.is_empty();
        *self.inner.query.lock() = query;

        if cleared && self.inner.search_active.swap(false, Ordering::SeqCst) {
            self.inner.page.store(1, Ordering::SeqCst);
            self.load_images();
        }
    }

    /// Runs the current query. An empty query never triggers a search call.
    pub fn execute_search(&self) {
        if self.inner.query.lock().is_empty() {
            return;
        }
        self.inner.search_active.store(true, Ordering::SeqCst);
        self.inner.page.store(1, Ordering::SeqCst);
        self.load_images();
    }
}

impl Inner {
    async fn load_images(&self) {
        let page = self.page.load(Ordering::SeqCst);
        let query = self.query.lock().clone();
        let search_active = self.search_active.load(Ordering::SeqCst);

        // Pages past the first append to what is already on screen.
        let previous = match &*self.state.borrow() {
            ViewState::Success(images) if page > 1 => images.clone(),
            _ => Vec::new(),
        };
        self.state.send_replace(ViewState::Loading);

        let result = if search_active && !query.is_empty() {
            self.repository
                .search_images(&query, page)
                .await
                .map(|results| results.images)
        } else {
            self.repository.get_images(page).await
        };

        match result {
            Ok(images) => {
                let mut accumulated = previous;
                accumulated.extend(images);
                self.state.send_replace(ViewState::Success(accumulated));
            }
            Err(err) => {
                warn!(error = %err, page, "Photo fetch failed");
                self.state.send_replace(ViewState::Error(error_message(&err)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::entities::{AuthorSummary, ImageUrls, SearchResults};
    use crate::domain::ports::mocks::{MemoryFavoriteStore, MockPhotoApi};

    fn sample_images(prefix: &str, count: usize) -> Vec<Image> {
        (0..count)
            .map(|n| {
                Image::new(
                    format!("{prefix}-{n}"),
                    ImageUrls::default(),
                    "",
                    AuthorSummary::default(),
                )
            })
            .collect()
    }

    fn repository(api: MockPhotoApi) -> ImageRepository {
        ImageRepository::new(Arc::new(api), Arc::new(MemoryFavoriteStore::new()))
    }

    async fn wait_for_success(
        rx: &mut watch::Receiver<ViewState<Vec<Image>>>,
        len: usize,
    ) -> Vec<Image> {
        let state = rx
            .wait_for(|state| state.success().is_some_and(|images| images.len() == len))
            .await
            .unwrap();
        state.success().unwrap().clone()
    }

    #[tokio::test]
    async fn test_page_one_yields_success_with_all_items() {
        let api = MockPhotoApi::new().with_page(1, sample_images("p1", 20));
        let holder = HomeState::new(repository(api));
        let mut rx = holder.state();

        let images = wait_for_success(&mut rx, 20).await;
        assert_eq!(images[0].id(), "p1-0");
        assert_eq!(images[19].id(), "p1-19");
    }

    #[tokio::test]
    async fn test_next_page_concatenates_in_arrival_order() {
        let api = MockPhotoApi::new()
            .with_page(1, sample_images("p1", 20))
            .with_page(2, sample_images("p2", 20));
        let holder = HomeState::new(repository(api));
        let mut rx = holder.state();
        wait_for_success(&mut rx, 20).await;

        holder.load_next_page();
        let images = wait_for_success(&mut rx, 40).await;
        assert_eq!(images[0].id(), "p1-0");
        assert_eq!(images[20].id(), "p2-0");
        assert_eq!(images[39].id(), "p2-19");
    }

    #[tokio::test]
    async fn test_fetch_failure_publishes_error_message() {
        let api = MockPhotoApi::new();
        api.set_fail(true);
        let holder = HomeState::new(repository(api));
        let mut rx = holder.state();

        let state = rx.wait_for(|state| state.error().is_some()).await.unwrap();
        assert_eq!(
            state.error(),
            Some("network error: mock transport failure")
        );
    }

    #[tokio::test]
    async fn test_empty_query_never_triggers_search() {
        let api = Arc::new(MockPhotoApi::new().with_page(1, sample_images("p1", 3)));
        let store = Arc::new(MemoryFavoriteStore::new());
        let holder = HomeState::new(ImageRepository::new(api.clone(), store));
        let mut rx = holder.state();
        wait_for_success(&mut rx, 3).await;

        holder.execute_search();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(api.search_calls(), 0);
    }

    #[tokio::test]
    async fn test_execute_search_issues_exactly_one_page_one_call() {
        let api = Arc::new(
            MockPhotoApi::new()
                .with_page(1, sample_images("p1", 3))
                .with_search_results(SearchResults {
                    total: 2,
                    total_pages: 1,
                    images: sample_images("hit", 2),
                }),
        );
        let store = Arc::new(MemoryFavoriteStore::new());
        let holder = HomeState::new(ImageRepository::new(api.clone(), store));
        let mut rx = holder.state();
        wait_for_success(&mut rx, 3).await;

        holder.set_search_query("mountains");
        holder.execute_search();

        let images = wait_for_success(&mut rx, 2).await;
        assert_eq!(images[0].id(), "hit-0");
        assert_eq!(api.search_calls(), 1);
        assert_eq!(api.last_search(), Some(("mountains".to_string(), 1)));
    }

    #[tokio::test]
    async fn test_clearing_query_returns_to_plain_listing() {
        let api = Arc::new(
            MockPhotoApi::new()
                .with_page(1, sample_images("p1", 3))
                .with_search_results(SearchResults {
                    total: 1,
                    total_pages: 1,
                    images: sample_images("hit", 1),
                }),
        );
        let store = Arc::new(MemoryFavoriteStore::new());
        let holder = HomeState::new(ImageRepository::new(api.clone(), store));
        let mut rx = holder.state();
        wait_for_success(&mut rx, 3).await;

        holder.set_search_query("mountains");
        holder.execute_search();
        wait_for_success(&mut rx, 1).await;

        holder.set_search_query("");
        let images = wait_for_success(&mut rx, 3).await;
        assert_eq!(images[0].id(), "p1-0");
        assert_eq!(api.list_calls(), 2);
    }
}
