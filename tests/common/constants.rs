//! Shared constants for end-to-end tests

#![allow(dead_code)]

/// API key the fake YouTube API accepts
pub const TEST_API_KEY: &str = "test-api-key";

/// Video with one page of three comments: one positive, one neutral, one negative
pub const VIDEO_SINGLE_PAGE: &str = "video-single-page";

/// Video whose comments span two pages joined by a continuation token
pub const VIDEO_TWO_PAGES: &str = "video-two-pages";

/// Continuation token returned by the first page of `VIDEO_TWO_PAGES`
pub const TWO_PAGES_TOKEN: &str = "fake-page-token-2";

/// Video with no comments at all
pub const VIDEO_EMPTY: &str = "video-empty";

/// Comments on the first page of `VIDEO_TWO_PAGES`, in order
pub const TWO_PAGES_FIRST: [&str; 2] = ["Absolutely wonderful!", "Boring and bad."];

/// Comments on the second page of `VIDEO_TWO_PAGES`, in order
pub const TWO_PAGES_SECOND: [&str; 1] = ["This is a tripod."];

/// Comments on the single page of `VIDEO_SINGLE_PAGE`, in order
pub const SINGLE_PAGE_COMMENTS: [&str; 3] = [
    "I love this!",
    "This is a video about cats.",
    "Terrible video.",
];

/// How long to wait for a spawned server to answer its first request
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual test requests
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
