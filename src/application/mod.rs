//! Application layer containing the repository and screen state holders.

/// Repository over the remote API and local store.
pub mod repository;
/// Screen state holders and view state.
pub mod state;

pub use repository::ImageRepository;
pub use state::{DetailState, FavoritesState, HomeState, ViewState};
