//! TubeMood Sentiment Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod sentiment;
pub mod server;
pub mod youtube;

// Re-export commonly used types for convenience
pub use sentiment::{SentimentBucket, SentimentScorer, VaderScorer};
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
pub use youtube::{fetch_comments, CommentSource, YoutubeClient};
