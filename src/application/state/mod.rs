//! Per-screen state holders.
//!
//! One holder per screen. Each publishes a [`ViewState`] on a watch channel,
//! mutates it only from completed asynchronous work, and aborts its spawned
//! tasks when dropped.

mod detail;
mod favorites;
mod home;
mod scope;
mod view_state;

pub use detail::{DetailState, IMAGE_NOT_FOUND};
pub use favorites::FavoritesState;
pub use home::HomeState;
pub use view_state::ViewState;
