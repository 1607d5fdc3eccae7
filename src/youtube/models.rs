//! Models for the YouTube Data API commentThreads responses.
//!
//! These types match the JSON structure returned by the API; only the
//! fields the fetcher needs are deserialized.

use serde::Deserialize;

/// One page of comment texts, in the order the API returned them.
#[derive(Debug, Clone, Default)]
pub struct CommentPage {
    pub comments: Vec<String>,
    /// Present when more pages exist; passed back as `pageToken`.
    pub next_page_token: Option<String>,
}

/// Top-level `commentThreads.list` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadListResponse {
    #[serde(default)]
    pub items: Vec<CommentThread>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub text_display: String,
}

impl From<CommentThreadListResponse> for CommentPage {
    fn from(response: CommentThreadListResponse) -> Self {
        CommentPage {
            comments: response
                .items
                .into_iter()
                .map(|thread| thread.snippet.top_level_comment.snippet.text_display)
                .collect(),
            next_page_token: response.next_page_token,
        }
    }
}

/// Error envelope the API returns on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}
