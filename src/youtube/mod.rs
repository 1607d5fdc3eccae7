//! Comment retrieval from the YouTube Data API.
//!
//! The API is reached through the [`CommentSource`] trait so tests can
//! substitute a fake paginated source; [`YoutubeClient`] is the real
//! implementation. [`fetch_comments`] drives pagination on top of either.

mod client;
mod models;

pub use client::{YoutubeClient, DEFAULT_API_BASE_URL, MAX_PAGE_SIZE};
pub use models::CommentPage;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while retrieving comments.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, timeout, or a response body that failed to decode.
    #[error("comments request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status (bad key, unknown video,
    /// comments disabled, quota exhausted).
    #[error("comments API returned {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

/// A paginated source of top-level comments for a video.
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch one page of comments, optionally continuing from a token
    /// returned by the previous page.
    async fn list_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentPage, FetchError>;
}

/// Retrieve all top-level comments for a video, in retrieval order.
///
/// Follows continuation tokens until a page omits one. Fail-fast: any page
/// error aborts the whole fetch and already-collected comments are
/// discarded. A video with zero comments yields `Ok` with an empty vec.
///
/// `video_id` is treated as opaque; invalid IDs are rejected remotely and
/// surface as [`FetchError::Api`].
pub async fn fetch_comments(
    source: &dyn CommentSource,
    video_id: &str,
) -> Result<Vec<String>, FetchError> {
    let mut comments = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = source.list_page(video_id, page_token.as_deref()).await?;
        comments.extend(page.comments);

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    debug!(video_id, count = comments.len(), "Fetched all comment pages");
    Ok(comments)
}
