use anyhow::Result;
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::sentiment::{
    classify, CategorizedComments, ClassificationError, ScoredComment, SentimentBucket,
    SentimentReport,
};
use crate::youtube::{fetch_comments, FetchError};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{log_requests, metrics, state::*, ServerConfig};

/// How many comments the filtered listing returns when no limit is given.
const DEFAULT_LISTING_LIMIT: usize = 20;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct AnalyzeBody {
    pub video_id: String,
}

#[derive(Serialize)]
struct SentimentSummary {
    positive: usize,
    neutral: usize,
    negative: usize,
}

#[derive(Serialize)]
struct AnalysisRow {
    /// 1-based position in retrieval order, for time-ordered views.
    index: usize,
    text: String,
    polarity: f64,
    subjectivity: f64,
}

#[derive(Serialize)]
struct AnalysisResponse {
    video_id: String,
    comment_count: usize,
    summary: SentimentSummary,
    table: Vec<AnalysisRow>,
    buckets: CategorizedComments,
}

impl AnalysisResponse {
    fn new(video_id: String, report: SentimentReport) -> Self {
        let summary = SentimentSummary {
            positive: report.buckets.positive.len(),
            neutral: report.buckets.neutral.len(),
            negative: report.buckets.negative.len(),
        };
        let table: Vec<AnalysisRow> = report
            .table
            .into_iter()
            .enumerate()
            .map(|(i, comment)| AnalysisRow {
                index: i + 1,
                text: comment.text,
                polarity: comment.polarity,
                subjectivity: comment.subjectivity,
            })
            .collect();

        AnalysisResponse {
            video_id,
            comment_count: table.len(),
            summary,
            table,
            buckets: report.buckets,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Deserialize, Debug)]
struct FilteredCommentsQuery {
    pub sentiment: SentimentBucket,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct FilteredCommentsResponse {
    video_id: String,
    sentiment: SentimentBucket,
    /// Bucket size before the limit is applied.
    total: usize,
    comments: Vec<ScoredComment>,
}

/// Why an analysis request failed, mapped to an HTTP error at the boundary.
///
/// Both variants are recoverable by simply re-issuing the request; no
/// partial results are returned alongside them.
#[derive(Debug)]
enum AnalysisFailure {
    Fetch(FetchError),
    Classification(ClassificationError),
}

impl IntoResponse for AnalysisFailure {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AnalysisFailure::Fetch(err) => {
                error!("Error fetching comments: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Error fetching comments: {}", err),
                )
            }
            AnalysisFailure::Classification(err) => {
                error!("Error analyzing comments: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error analyzing comments: {}", err),
                )
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

/// Fetch every comment for the video and classify the batch.
///
/// The comment collection lives only for this call; nothing is cached
/// across requests.
async fn fetch_and_classify(
    state: &ServerState,
    video_id: &str,
) -> Result<SentimentReport, AnalysisFailure> {
    let comments = fetch_comments(state.comment_source.as_ref(), video_id)
        .await
        .map_err(AnalysisFailure::Fetch)?;
    metrics::record_comments_fetched(comments.len());

    classify(state.scorer.as_ref(), &comments).map_err(AnalysisFailure::Classification)
}

async fn run_analysis(
    state: &ServerState,
    video_id: &str,
) -> Result<SentimentReport, AnalysisFailure> {
    let start = Instant::now();
    let result = fetch_and_classify(state, video_id).await;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(AnalysisFailure::Fetch(_)) => "fetch_error",
        Err(AnalysisFailure::Classification(_)) => "classification_error",
    };
    metrics::record_analysis(outcome, start.elapsed());

    result
}

async fn analyze(State(state): State<ServerState>, Json(body): Json<AnalyzeBody>) -> Response {
    match run_analysis(&state, &body.video_id).await {
        Ok(report) => {
            info!(
                video_id = %body.video_id,
                comments = report.table.len(),
                "Analysis complete"
            );
            Json(AnalysisResponse::new(body.video_id, report)).into_response()
        }
        Err(failure) => failure.into_response(),
    }
}

async fn filtered_comments(
    State(state): State<ServerState>,
    Path(video_id): Path<String>,
    Query(query): Query<FilteredCommentsQuery>,
) -> Response {
    let report = match run_analysis(&state, &video_id).await {
        Ok(report) => report,
        Err(failure) => return failure.into_response(),
    };

    let bucket = report.buckets.bucket(query.sentiment);
    let limit = query.limit.unwrap_or(DEFAULT_LISTING_LIMIT);

    let response = FilteredCommentsResponse {
        video_id,
        sentiment: query.sentiment,
        total: bucket.len(),
        comments: bucket.iter().take(limit).cloned().collect(),
    };
    Json(response).into_response()
}

pub fn make_app(
    config: ServerConfig,
    comment_source: GuardedCommentSource,
    scorer: GuardedScorer,
) -> Router {
    let state = ServerState::new(config, comment_source, scorer);

    let analysis_routes: Router = Router::new()
        .route("/analysis", post(analyze))
        .route("/analysis/{video_id}/comments", get(filtered_comments))
        .with_state(state.clone());

    let mut app: Router = Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .nest("/v1", analysis_routes);

    app = app.layer(middleware::from_fn_with_state(state, log_requests));

    app
}

pub async fn run_server(
    config: ServerConfig,
    comment_source: GuardedCommentSource,
    scorer: GuardedScorer,
) -> Result<()> {
    let metrics_app: Router = Router::new().route("/metrics", get(metrics::metrics_handler));
    let metrics_listener =
        tokio::net::TcpListener::bind(format!("127.0.0.1:{}", config.metrics_port)).await?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, metrics_app).await {
            error!("Metrics server failed: {}", err);
        }
    });

    let port = config.port;
    let app = make_app(config, comment_source, scorer);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
