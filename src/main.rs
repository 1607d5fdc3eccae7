use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tubemood_server::config::FileConfig;
use tubemood_server::sentiment::VaderScorer;
use tubemood_server::server::{self, metrics, RequestsLoggingLevel, ServerConfig};
use tubemood_server::youtube::{YoutubeClient, DEFAULT_API_BASE_URL, MAX_PAGE_SIZE};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. CLI flags take precedence over it.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// YouTube Data API key. Falls back to the YOUTUBE_API_KEY environment
    /// variable, then to the config file.
    #[clap(long)]
    pub api_key: Option<String>,

    /// Base URL of the YouTube Data API.
    #[clap(long)]
    pub youtube_base_url: Option<String>,

    /// Number of comments to request per page (the API caps this at 100).
    #[clap(long)]
    pub page_size: Option<u32>,

    /// Timeout in seconds for YouTube API requests.
    #[clap(long)]
    pub youtube_timeout_secs: Option<u64>,

    /// The port to listen on.
    #[clap(short, long)]
    pub port: Option<u16>,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long)]
    pub metrics_port: Option<u16>,

    /// The level of logging to perform on each request.
    #[clap(long)]
    pub logging_level: Option<RequestsLoggingLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            FileConfig::load(path)?
        }
        None => FileConfig::default(),
    };
    let youtube_config = file_config.youtube.unwrap_or_default();

    // CLI beats environment beats config file for the credential
    let api_key = cli_args
        .api_key
        .or_else(|| std::env::var("YOUTUBE_API_KEY").ok())
        .or(youtube_config.api_key)
        .context(
            "A YouTube Data API key is required (--api-key, YOUTUBE_API_KEY, or config file)",
        )?;

    let base_url = cli_args
        .youtube_base_url
        .or(youtube_config.base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let page_size = cli_args
        .page_size
        .or(youtube_config.page_size)
        .unwrap_or(MAX_PAGE_SIZE);
    let timeout_secs = cli_args
        .youtube_timeout_secs
        .or(youtube_config.timeout_secs)
        .unwrap_or(30);

    let config = ServerConfig {
        requests_logging_level: cli_args
            .logging_level
            .or(file_config.logging_level)
            .unwrap_or_default(),
        port: cli_args.port.or(file_config.port).unwrap_or(3001),
        metrics_port: cli_args
            .metrics_port
            .or(file_config.metrics_port)
            .unwrap_or(9091),
    };

    info!("Initializing metrics...");
    metrics::init_metrics();

    info!("YouTube API endpoint: {}", base_url);
    let youtube_client = Arc::new(YoutubeClient::new(base_url, api_key, page_size, timeout_secs));

    info!("Loading sentiment lexicon...");
    let scorer = Arc::new(VaderScorer::new());

    info!("Ready to serve at port {}!", config.port);
    info!("Metrics available at port {}!", config.metrics_port);
    server::run_server(config, youtube_client, scorer).await
}
