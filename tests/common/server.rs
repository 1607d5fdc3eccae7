//! Test server lifecycle management
//!
//! Each test gets an isolated app instance wired to its own fake YouTube
//! API, both on random ports.

use super::constants::*;
use super::fake_youtube::FakeYoutube;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tubemood_server::sentiment::VaderScorer;
use tubemood_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use tubemood_server::youtube::YoutubeClient;

/// Test server instance backed by a fake YouTube API
///
/// When dropped, both servers gracefully shut down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The fake upstream API, exposed so tests can assert on request counts
    pub youtube: FakeYoutube,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a test server whose client carries the accepted API key.
    pub async fn spawn() -> Self {
        Self::spawn_with_api_key(TEST_API_KEY).await
    }

    /// Spawns a test server whose client carries `api_key`.
    ///
    /// Pass a key other than [`TEST_API_KEY`] to exercise authorization
    /// failures end to end.
    pub async fn spawn_with_api_key(api_key: &str) -> Self {
        let youtube = FakeYoutube::spawn().await;

        let client = YoutubeClient::new(
            youtube.base_url.clone(),
            api_key.to_string(),
            100,
            REQUEST_TIMEOUT_SECS,
        );
        let scorer = VaderScorer::new();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            metrics_port: 0, // unused, the metrics server is not spawned by make_app
            requests_logging_level: RequestsLoggingLevel::None,
        };

        let app = make_app(config, Arc::new(client), Arc::new(scorer));

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .expect("Server failed");
        });

        let server = Self {
            base_url,
            youtube,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!("Server did not become ready within {:?}", timeout);
            }

            if let Ok(response) = client.get(format!("{}/", self.base_url)).send().await {
                if response.status().is_success() {
                    return;
                }
            }

            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
}
