//! HTTP client for the YouTube Data API v3.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::models::{ApiErrorBody, CommentPage, CommentThreadListResponse};
use super::{CommentSource, FetchError};

/// Production endpoint of the YouTube Data API v3.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// The API caps `maxResults` for commentThreads at 100.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Client for the YouTube Data API commentThreads endpoint.
///
/// Constructed once at startup and shared behind an `Arc`; holds no
/// per-request state.
#[derive(Clone)]
pub struct YoutubeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    page_size: u32,
}

impl YoutubeClient {
    /// Create a new YouTube API client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the API (override it to point tests at a fake)
    /// * `api_key` - Static API credential passed as the `key` query parameter
    /// * `page_size` - Comments requested per page, clamped to the API maximum
    /// * `timeout_secs` - Request timeout in seconds
    pub fn new(base_url: String, api_key: String, page_size: u32, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            api_key,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Get the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CommentSource for YoutubeClient {
    async fn list_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentPage, FetchError> {
        let url = format!("{}/commentThreads", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("part", "snippet".to_string()),
            ("videoId", video_id.to_string()),
            ("maxResults", self.page_size.to_string()),
            ("textFormat", "plainText".to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        debug!(video_id, page_token, "Requesting comment page");

        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: surface the API's own message when the error
            // body is well-formed, fall back to the status line otherwise.
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => "no error detail in response".to_string(),
            };
            return Err(FetchError::Api { status, message });
        }

        let body: CommentThreadListResponse = response.json().await?;
        Ok(body.into())
    }
}
