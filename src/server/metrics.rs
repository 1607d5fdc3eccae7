use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, Histogram, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all TubeMood metrics
const PREFIX: &str = "tubemood";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "endpoint", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "endpoint"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Analysis Metrics
    pub static ref ANALYSES_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_analyses_total"), "Analysis requests by outcome"),
        &["outcome"]
    ).expect("Failed to create analyses_total metric");

    pub static ref ANALYSIS_DURATION_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            format!("{PREFIX}_analysis_duration_seconds"),
            "Full fetch-and-classify duration in seconds"
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0])
    ).expect("Failed to create analysis_duration_seconds metric");

    pub static ref COMMENTS_FETCHED_TOTAL: Counter = Counter::new(
        format!("{PREFIX}_comments_fetched_total"),
        "Total comments retrieved from the YouTube API"
    ).expect("Failed to create comments_fetched_total metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(ANALYSES_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(ANALYSIS_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(COMMENTS_FETCHED_TOTAL.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Collapse request paths into a bounded set of endpoint labels.
///
/// Analysis paths embed arbitrary video IDs, so raw paths would blow up
/// metric cardinality.
pub fn categorize_endpoint(path: &str) -> &'static str {
    if path == "/" {
        "home"
    } else if path == "/v1/analysis" {
        "analysis"
    } else if path.starts_with("/v1/analysis/") {
        "filtered_comments"
    } else if path == "/metrics" {
        "metrics"
    } else {
        "other"
    }
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let endpoint = categorize_endpoint(path);

    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, endpoint])
        .observe(duration.as_secs_f64());
}

/// Record a completed analysis attempt
pub fn record_analysis(outcome: &str, duration: Duration) {
    ANALYSES_TOTAL.with_label_values(&[outcome]).inc();
    ANALYSIS_DURATION_SECONDS.observe(duration.as_secs_f64());
}

/// Record comments retrieved from the API
pub fn record_comments_fetched(count: usize) {
    COMMENTS_FETCHED_TOTAL.inc_by(count as f64);
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
