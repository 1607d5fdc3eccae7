//! In-process fake of the YouTube Data API commentThreads endpoint
//!
//! Serves canned paginated responses so end-to-end tests can exercise the
//! real `YoutubeClient` over real HTTP, including the continuation-token
//! flow and API error envelopes.

use super::constants::*;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Handle to a running fake YouTube API
///
/// When dropped, the server task is shut down.
pub struct FakeYoutube {
    /// Base URL to hand to `YoutubeClient`
    pub base_url: String,

    /// Number of commentThreads requests received so far
    requests: Arc<AtomicUsize>,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl FakeYoutube {
    /// Spawn the fake API on a random port.
    pub async fn spawn() -> Self {
        let requests = Arc::new(AtomicUsize::new(0));

        let app = Router::new()
            .route("/commentThreads", get(comment_threads))
            .with_state(requests.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake YouTube API to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Fake YouTube API failed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            requests,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// How many commentThreads requests the fake has served.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

fn items(comments: &[&str]) -> Vec<Value> {
    comments
        .iter()
        .map(|text| {
            json!({
                "snippet": {
                    "topLevelComment": {
                        "snippet": { "textDisplay": text }
                    }
                }
            })
        })
        .collect()
}

fn api_error(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "error": {
            "code": status.as_u16(),
            "message": message,
        }
    });
    (status, Json(body)).into_response()
}

async fn comment_threads(
    State(requests): State<Arc<AtomicUsize>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    requests.fetch_add(1, Ordering::SeqCst);

    if params.get("key").map(String::as_str) != Some(TEST_API_KEY) {
        return api_error(
            StatusCode::FORBIDDEN,
            "API key not valid. Please pass a valid API key.",
        );
    }

    let video_id = params.get("videoId").map(String::as_str).unwrap_or("");
    let page_token = params.get("pageToken").map(String::as_str);

    let body = match (video_id, page_token) {
        (VIDEO_EMPTY, _) => json!({ "items": [] }),
        (VIDEO_SINGLE_PAGE, _) => json!({ "items": items(&SINGLE_PAGE_COMMENTS) }),
        (VIDEO_TWO_PAGES, None) => json!({
            "items": items(&TWO_PAGES_FIRST),
            "nextPageToken": TWO_PAGES_TOKEN,
        }),
        (VIDEO_TWO_PAGES, Some(token)) if token == TWO_PAGES_TOKEN => {
            json!({ "items": items(&TWO_PAGES_SECOND) })
        }
        _ => {
            return api_error(
                StatusCode::NOT_FOUND,
                "The video identified by the videoId parameter could not be found.",
            )
        }
    };

    Json(body).into_response()
}
