//! Detail screen state holder.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::warn;

use super::scope::TaskScope;
use super::view_state::{ViewState, error_message};
use crate::application::repository::ImageRepository;
use crate::domain::entities::Image;
use crate::domain::ports::{DownloaderPort, NotificationPort};

/// Message published when a detail lookup misses.
pub const IMAGE_NOT_FOUND: &str = "Image not found";

/// State holder for the detail screen.
///
/// On construction fetches page 1 of the listing and scans it for the
/// requested id. The lookup cannot see past the first page, a known
/// shortcoming kept deliberately (see DESIGN.md). The live favorite flag for
/// the id is merged into the held payload whenever it changes.
pub struct DetailState {
    inner: Arc<Inner>,
    tasks: TaskScope,
}

struct Inner {
    repository: ImageRepository,
    downloader: Arc<dyn DownloaderPort>,
    notifier: Arc<dyn NotificationPort>,
    image_id: String,
    state: watch::Sender<ViewState<Image>>,
    current: Mutex<Option<Image>>,
}

impl DetailState {
    /// Creates the holder, starts the lookup and the favorite-flag merge.
    #[must_use]
    pub fn new(
        repository: ImageRepository,
        downloader: Arc<dyn DownloaderPort>,
        notifier: Arc<dyn NotificationPort>,
        image_id: impl Into<String>,
    ) -> Self {
        let holder = Self {
            inner: Arc::new(Inner {
                repository,
                downloader,
                notifier,
                image_id: image_id.into(),
                state: watch::Sender::new(ViewState::Loading),
                current: Mutex::new(None),
            }),
            tasks: TaskScope::default(),
        };

        let inner = Arc::clone(&holder.inner);
        holder.tasks.spawn(async move { inner.load_details().await });

        let inner = Arc::clone(&holder.inner);
        holder.tasks.spawn(async move { inner.watch_favorite().await });

        holder
    }

    /// Subscribes to the published view state.
    #[must_use]
    pub fn state(&self) -> watch::Receiver<ViewState<Image>> {
        self.inner.state.subscribe()
    }

    /// The id this holder was opened for.
    #[must_use]
    pub fn image_id(&self) -> &str {
        &self.inner.image_id
    }

    /// Favorites or unfavorites based on the currently held flag.
    pub fn toggle_favorite(&self) {
        let inner = Arc::clone(&self.inner);
        self.tasks.spawn(async move { inner.toggle_favorite().await });
    }

    /// Downloads the file at `url` to local storage. Fire-and-forget: the
    /// outcome is reported through the notification port only.
    pub fn download_image(&self, url: &str) {
        let inner = Arc::clone(&self.inner);
        let url = url.to_string();
        self.tasks.spawn(async move { inner.download_image(&url).await });
    }
}

impl Inner {
    async fn load_details(&self) {
        match self.repository.get_images(1).await {
            Ok(images) => {
                let found = images.into_iter().find(|image| image.id() == self.image_id);
                match found {
                    Some(image) => {
                        let favorite = *self.repository.is_image_favorite(&self.image_id).borrow();
                        let image = image.with_favorite(favorite);
                        *self.current.lock() = Some(image.clone());
                        self.state.send_replace(ViewState::Success(image));
                    }
                    None => {
                        self.state
                            .send_replace(ViewState::Error(IMAGE_NOT_FOUND.to_string()));
                    }
                }
            }
            Err(err) => {
                warn!(error = %err, id = %self.image_id, "Detail fetch failed");
                self.state.send_replace(ViewState::Error(error_message(&err)));
            }
        }
    }

    async fn watch_favorite(&self) {
        let mut flag = self.repository.is_image_favorite(&self.image_id);
        loop {
            if flag.changed().await.is_err() {
                break;
            }
            let favorite = *flag.borrow_and_update();
            let mut current = self.current.lock();
            if let Some(image) = current.as_ref() {
                let updated = image.clone().with_favorite(favorite);
                *current = Some(updated.clone());
                self.state.send_replace(ViewState::Success(updated));
            }
        }
    }

    async fn toggle_favorite(&self) {
        let image = self.current.lock().clone();
        let Some(image) = image else {
            return;
        };

        let result = if image.is_favorite() {
            self.repository.unfavorite_image(image.id()).await
        } else {
            self.repository.favorite_image(&image).await
        };
        if let Err(err) = result {
            warn!(error = %err, id = image.id(), "Failed to toggle favorite");
        }
    }

    async fn download_image(&self, url: &str) {
        match self.downloader.download(url).await {
            Ok(path) => {
                self.notifier
                    .send("Image saved successfully", &path.display().to_string());
            }
            Err(err) => {
                warn!(error = %err, url, "Download failed");
                self.notifier.send("Failed to save image", &err.to_string());
            }
        }
    }
}
