//! Unsplash photo entity.

use serde::{Deserialize, Serialize};

/// The five sized renditions Unsplash serves for every photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls {
    /// Unprocessed original.
    pub raw: String,
    /// Full resolution.
    pub full: String,
    /// Regular (grid-sized) rendition.
    pub regular: String,
    /// Small rendition.
    pub small: String,
    /// Thumbnail rendition.
    pub thumb: String,
}

/// Denormalized author data carried on every photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    /// Unsplash user id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Profile handle.
    pub username: String,
    /// Avatar URL (medium rendition).
    pub avatar_url: String,
}

/// A single remote photo and its metadata.
///
/// Immutable value: a state change (the favorite flag) produces a new
/// instance via [`Image::with_favorite`], never in-place mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    id: String,
    created_at: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    color: Option<String>,
    blur_hash: Option<String>,
    description: Option<String>,
    urls: ImageUrls,
    download_url: String,
    likes: Option<u32>,
    author: AuthorSummary,
    favorite: bool,
}

impl Image {
    /// Creates a photo with the fields every Unsplash record carries.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        urls: ImageUrls,
        download_url: impl Into<String>,
        author: AuthorSummary,
    ) -> Self {
        Self {
            id: id.into(),
            created_at: None,
            width: None,
            height: None,
            color: None,
            blur_hash: None,
            description: None,
            urls,
            download_url: download_url.into(),
            likes: None,
            author,
            favorite: false,
        }
    }

    /// Sets the creation timestamp (ISO 8601 as served by the API).
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Sets the pixel dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Sets the dominant color (hex string).
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the blur-hash placeholder signature.
    #[must_use]
    pub fn with_blur_hash(mut self, blur_hash: impl Into<String>) -> Self {
        self.blur_hash = Some(blur_hash.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the like count.
    #[must_use]
    pub const fn with_likes(mut self, likes: u32) -> Self {
        self.likes = Some(likes);
        self
    }

    /// Returns a copy with the favorite flag replaced.
    #[must_use]
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Photo id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creation timestamp, if the API supplied one.
    #[must_use]
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    /// Pixel width.
    #[must_use]
    pub const fn width(&self) -> Option<u32> {
        self.width
    }

    /// Pixel height.
    #[must_use]
    pub const fn height(&self) -> Option<u32> {
        self.height
    }

    /// Dominant color.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Blur-hash signature.
    #[must_use]
    pub fn blur_hash(&self) -> Option<&str> {
        self.blur_hash.as_deref()
    }

    /// Description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sized renditions.
    #[must_use]
    pub const fn urls(&self) -> &ImageUrls {
        &self.urls
    }

    /// Download link.
    #[must_use]
    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    /// Like count.
    #[must_use]
    pub const fn likes(&self) -> Option<u32> {
        self.likes
    }

    /// Author summary.
    #[must_use]
    pub const fn author(&self) -> &AuthorSummary {
        &self.author
    }

    /// Whether the photo is currently favorited locally.
    #[must_use]
    pub const fn is_favorite(&self) -> bool {
        self.favorite
    }
}
