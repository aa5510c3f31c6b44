//! Persisted favorite row.

use super::{AuthorSummary, Image, ImageUrls};

/// Flattened subset of an [`Image`] persisted for a favorited photo.
///
/// One row per id; re-favoriting an id replaces the existing row. The record
/// carries enough to reconstruct a usable [`Image`] without the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteRecord {
    /// Photo id, primary key.
    pub id: String,
    /// Creation timestamp as served by the API.
    pub created_at: Option<String>,
    /// Pixel width.
    pub width: Option<u32>,
    /// Pixel height.
    pub height: Option<u32>,
    /// Dominant color.
    pub color: Option<String>,
    /// Blur-hash placeholder signature.
    pub blur_hash: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Unprocessed original URL.
    pub raw_url: String,
    /// Full resolution URL.
    pub full_url: String,
    /// Regular rendition URL.
    pub regular_url: String,
    /// Small rendition URL.
    pub small_url: String,
    /// Thumbnail URL.
    pub thumb_url: String,
    /// Download link.
    pub download_url: String,
    /// Like count.
    pub likes: Option<u32>,
    /// Author id.
    pub author_id: String,
    /// Author display name.
    pub author_name: String,
    /// Author profile handle.
    pub author_username: String,
    /// Author avatar URL.
    pub author_avatar_url: String,
}

impl FavoriteRecord {
    /// Flattens an [`Image`] into its persisted form.
    #[must_use]
    pub fn from_image(image: &Image) -> Self {
        let urls = image.urls();
        let author = image.author();
        Self {
            id: image.id().to_string(),
            created_at: image.created_at().map(str::to_string),
            width: image.width(),
            height: image.height(),
            color: image.color().map(str::to_string),
            blur_hash: image.blur_hash().map(str::to_string),
            description: image.description().map(str::to_string),
            raw_url: urls.raw.clone(),
            full_url: urls.full.clone(),
            regular_url: urls.regular.clone(),
            small_url: urls.small.clone(),
            thumb_url: urls.thumb.clone(),
            download_url: image.download_url().to_string(),
            likes: image.likes(),
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            author_username: author.username.clone(),
            author_avatar_url: author.avatar_url.clone(),
        }
    }

    /// Reconstructs an [`Image`] from the persisted row.
    ///
    /// Fields the schema does not store come back as empty defaults. The
    /// favorite flag is set: a record only exists while the photo is
    /// favorited.
    #[must_use]
    pub fn into_image(self) -> Image {
        let urls = ImageUrls {
            raw: self.raw_url,
            full: self.full_url,
            regular: self.regular_url,
            small: self.small_url,
            thumb: self.thumb_url,
        };
        let author = AuthorSummary {
            id: self.author_id,
            name: self.author_name,
            username: self.author_username,
            avatar_url: self.author_avatar_url,
        };

        let mut image = Image::new(self.id, urls, self.download_url, author);
        if let Some(created_at) = self.created_at {
            image = image.with_created_at(created_at);
        }
        if let (Some(width), Some(height)) = (self.width, self.height) {
            image = image.with_dimensions(width, height);
        }
        if let Some(color) = self.color {
            image = image.with_color(color);
        }
        if let Some(blur_hash) = self.blur_hash {
            image = image.with_blur_hash(blur_hash);
        }
        if let Some(description) = self.description {
            image = image.with_description(description);
        }
        if let Some(likes) = self.likes {
            image = image.with_likes(likes);
        }
        image.with_favorite(true)
    }
}
