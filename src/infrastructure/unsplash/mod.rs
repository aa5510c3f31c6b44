//! Unsplash API adapter.

mod client;
mod dto;

pub use client::{PHOTOS_PER_PAGE, UnsplashClient};
