//! Unsplash API HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{ErrorResponseDto, PhotoDto, SearchResponseDto};
use crate::domain::entities::{Image, SearchResults};
use crate::domain::errors::NetworkError;
use crate::domain::ports::PhotoApiPort;

const UNSPLASH_API_BASE: &str = "https://api.unsplash.com";

/// Photos per page on every listing and search call.
pub const PHOTOS_PER_PAGE: u32 = 30;

/// Unsplash API client.
pub struct UnsplashClient {
    client: Client,
    base_url: String,
    client_id: String,
}

impl UnsplashClient {
    /// Creates a new client against the public API.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(client_id: impl Into<String>) -> Result<Self, NetworkError> {
        Self::with_base_url(UNSPLASH_API_BASE, client_id)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .user_agent(concat!("oxisplash/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| NetworkError::transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            client_id: client_id.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, NetworkError> {
        let url = format!("{}{path}", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("client_id", self.client_id.clone())])
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, path, "Failed to reach Unsplash API");
                if e.is_timeout() {
                    NetworkError::transport("request timed out")
                } else if e.is_connect() {
                    NetworkError::transport("failed to connect to Unsplash")
                } else {
                    NetworkError::transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        response.json().await.map_err(|e| {
            warn!(error = %e, path, "Failed to parse Unsplash response");
            NetworkError::malformed(e.to_string())
        })
    }

    async fn handle_error_response(
        status: StatusCode,
        response: reqwest::Response,
    ) -> NetworkError {
        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) if !body.errors.is_empty() => body.errors.join("; "),
            _ => format!("HTTP {status}"),
        };
        NetworkError::status(status.as_u16(), message)
    }
}

#[async_trait]
impl PhotoApiPort for UnsplashClient {
    async fn list_photos(&self, page: u32) -> Result<Vec<Image>, NetworkError> {
        debug!(page, per_page = PHOTOS_PER_PAGE, "Fetching photo listing");

        let photos: Vec<PhotoDto> = self
            .get_json(
                "/photos",
                &[
                    ("page", page.to_string()),
                    ("per_page", PHOTOS_PER_PAGE.to_string()),
                ],
            )
            .await?;

        debug!(count = photos.len(), page, "Photo listing fetched");
        Ok(photos.into_iter().map(PhotoDto::into_image).collect())
    }

    async fn search_photos(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResults, NetworkError> {
        debug!(query, page, "Searching photos");

        let response: SearchResponseDto = self
            .get_json(
                "/search/photos",
                &[
                    ("query", query.to_string()),
                    ("page", page.to_string()),
                    ("per_page", PHOTOS_PER_PAGE.to_string()),
                ],
            )
            .await?;

        debug!(
            total = response.total,
            total_pages = response.total_pages,
            "Search completed"
        );
        Ok(response.into_results())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = UnsplashClient::new("test-client-id");
        assert!(client.is_ok());
    }

    #[test]
    fn test_custom_base_url_is_kept() {
        let client =
            UnsplashClient::with_base_url("http://127.0.0.1:9/api", "test-client-id").unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:9/api");
    }
}
