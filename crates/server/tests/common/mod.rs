//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port, wired through
//! `build_app_state` to an `httpmock::MockServer` that plays both the Druid SQL
//! endpoint and the Gemini API.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use druidgen_server::{
    config::{AppConfig, GenerationConfig},
    router::create_router,
    state::build_app_state,
};
use httpmock::MockServer;
use reqwest::Client;
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

pub const DRUID_PATH: &str = "/druid/v2/sql";
pub const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";
pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_ORIGIN: &str = "http://localhost:18081";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

/// A configuration pointing both upstreams at `mock_server`.
pub fn test_config(mock_server: &MockServer) -> AppConfig {
    AppConfig {
        port: 0,
        druid_sql_url: mock_server.url(DRUID_PATH),
        allowed_origin: TEST_ORIGIN.to_string(),
        request_timeout_secs: 5,
        generation: GenerationConfig {
            provider: "gemini".to_string(),
            api_url: Some(mock_server.url(GEMINI_PATH)),
            api_key: Some(TEST_API_KEY.to_string()),
            ..Default::default()
        },
    }
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        // `try_init` is used to prevent panic if the logger is already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start_async().await;
        let app_state = build_app_state(test_config(&mock_server)).await?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The receiver is gone if the server task already stopped.
            let _ = tx.send(());
        }
    }
}
