use serde::Deserialize;

use crate::domain::entities::{AuthorSummary, Image, ImageUrls, SearchResults};

/// Unsplash photo object as served on the wire.
#[derive(Debug, Deserialize)]
pub struct PhotoDto {
    /// Photo id.
    pub id: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Pixel width.
    #[serde(default)]
    pub width: Option<u32>,
    /// Pixel height.
    #[serde(default)]
    pub height: Option<u32>,
    /// Dominant color.
    #[serde(default)]
    pub color: Option<String>,
    /// Blur-hash placeholder signature.
    #[serde(default)]
    pub blur_hash: Option<String>,
    /// Author-written description.
    #[serde(default)]
    pub description: Option<String>,
    /// Generated alt text, used when no description exists.
    #[serde(default)]
    pub alt_description: Option<String>,
    /// Sized renditions.
    pub urls: UrlsDto,
    /// Photo links.
    #[serde(default)]
    pub links: LinksDto,
    /// Like count.
    #[serde(default)]
    pub likes: Option<u32>,
    /// Author.
    #[serde(default)]
    pub user: Option<UserDto>,
}

/// Sized rendition URLs.
#[derive(Debug, Default, Deserialize)]
pub struct UrlsDto {
    /// Unprocessed original.
    #[serde(default)]
    pub raw: String,
    /// Full resolution.
    #[serde(default)]
    pub full: String,
    /// Regular rendition.
    #[serde(default)]
    pub regular: String,
    /// Small rendition.
    #[serde(default)]
    pub small: String,
    /// Thumbnail.
    #[serde(default)]
    pub thumb: String,
}

/// Photo link collection.
#[derive(Debug, Default, Deserialize)]
pub struct LinksDto {
    /// Download link.
    #[serde(default)]
    pub download: String,
}

/// Author as embedded in a photo object.
#[derive(Debug, Deserialize)]
pub struct UserDto {
    /// User id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Profile handle.
    #[serde(default)]
    pub username: String,
    /// Avatar renditions.
    #[serde(default)]
    pub profile_image: Option<ProfileImageDto>,
}

/// Avatar renditions.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileImageDto {
    /// Small avatar.
    #[serde(default)]
    pub small: String,
    /// Medium avatar.
    #[serde(default)]
    pub medium: String,
    /// Large avatar.
    #[serde(default)]
    pub large: String,
}

/// Search response envelope.
#[derive(Debug, Deserialize)]
pub struct SearchResponseDto {
    /// Total hits across all pages.
    pub total: u64,
    /// Total pages at the current page size.
    pub total_pages: u64,
    /// The requested page of photos.
    pub results: Vec<PhotoDto>,
}

/// Unsplash error response body.
#[derive(Debug, Deserialize)]
pub struct ErrorResponseDto {
    /// Error messages.
    #[serde(default)]
    pub errors: Vec<String>,
}

impl PhotoDto {
    /// Maps the wire record into the domain record.
    #[must_use]
    pub fn into_image(self) -> Image {
        let urls = ImageUrls {
            raw: self.urls.raw,
            full: self.urls.full,
            regular: self.urls.regular,
            small: self.urls.small,
            thumb: self.urls.thumb,
        };
        let author = self.user.map_or_else(AuthorSummary::default, |user| {
            AuthorSummary {
                id: user.id,
                name: user.name,
                username: user.username,
                avatar_url: user.profile_image.map(|p| p.medium).unwrap_or_default(),
            }
        });

        let mut image = Image::new(self.id, urls, self.links.download, author);
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
        if let Some(description) = self.description.or(self.alt_description) {
            image = image.with_description(description);
        }
        if let Some(likes) = self.likes {
            image = image.with_likes(likes);
        }
        image
    }
}

impl SearchResponseDto {
    /// Maps the wire envelope into the domain record.
    #[must_use]
    pub fn into_results(self) -> SearchResults {
        SearchResults {
            total: self.total,
            total_pages: self.total_pages,
            images: self.results.into_iter().map(PhotoDto::into_image).collect(),
        }
    }
}
