//! Favorites screen state holder.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::warn;

use super::scope::TaskScope;
use super::view_state::ViewState;
use crate::application::repository::ImageRepository;
use crate::domain::entities::Image;

/// State holder for the favorites screen.
///
/// Subscribed to the live favorites sequence for its whole lifetime: Empty
/// when the table is empty, Success otherwise. The subscription ends when
/// the holder is dropped.
pub struct FavoritesState {
    inner: Arc<Inner>,
    tasks: TaskScope,
}

struct Inner {
    repository: ImageRepository,
    state: watch::Sender<ViewState<Vec<Image>>>,
}

impl FavoritesState {
    /// Creates the holder and starts the live subscription.
    #[must_use]
    pub fn new(repository: ImageRepository) -> Self {
        let holder = Self {
            inner: Arc::new(Inner {
                repository,
                state: watch::Sender::new(ViewState::Loading),
            }),
            tasks: TaskScope::default(),
        };

        let inner = Arc::clone(&holder.inner);
        holder.tasks.spawn(async move { inner.watch_favorites().await });
        holder
    }

    /// Subscribes to the published view state.
    #[must_use]
    pub fn state(&self) -> watch::Receiver<ViewState<Vec<Image>>> {
        self.inner.state.subscribe()
    }

    /// Removes a photo from the favorites.
    pub fn remove_from_favorites(&self, id: &str) {
        let inner = Arc::clone(&self.inner);
        let id = id.to_string();
        self.tasks.spawn(async move {
            if let Err(err) = inner.repository.unfavorite_image(&id).await {
                warn!(error = %err, %id, "Failed to remove favorite");
            }
        });
    }
}

impl Inner {
    async fn watch_favorites(&self) {
        let mut favorites = self.repository.favorite_images();
        loop {
            let snapshot = favorites.borrow_and_update().clone();
            let next = if snapshot.is_empty() {
                ViewState::Empty
            } else {
                ViewState::Success(snapshot)
            };
            self.state.send_replace(next);

            if favorites.changed().await.is_err() {
                break;
            }
        }
    }
}
