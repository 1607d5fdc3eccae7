use axum::extract::FromRef;

use crate::sentiment::SentimentScorer;
use crate::youtube::CommentSource;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedCommentSource = Arc<dyn CommentSource>;
pub type GuardedScorer = Arc<dyn SentimentScorer>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub comment_source: GuardedCommentSource,
    pub scorer: GuardedScorer,
    pub hash: String,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        comment_source: GuardedCommentSource,
        scorer: GuardedScorer,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            comment_source,
            scorer,
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedCommentSource {
    fn from_ref(input: &ServerState) -> Self {
        input.comment_source.clone()
    }
}

impl FromRef<ServerState> for GuardedScorer {
    fn from_ref(input: &ServerState) -> Self {
        input.scorer.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
