//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and preparing the database schema.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reflink_api::{create_app, create_app_state, run_server, AppState};
use reflink_common::AppConfig;
use reflink_service::ServiceContext;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, OnceCell};
use tokio::task::JoinHandle;

const SCHEMA_SQL: &str = include_str!("../../../migrations/0001_initial_schema.sql");

static SCHEMA: OnceCell<()> = OnceCell::const_new();

/// Test server instance that manages lifecycle
///
/// Dropping the server triggers its graceful shutdown.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    state: AppState,
    shutdown: Option<oneshot::Sender<()>>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state and make sure the tables exist
        let state = create_app_state(config).await?;
        ensure_schema(&state).await?;

        // Build application
        let app = create_app(state.clone());

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let shutdown = async {
                shutdown_rx.await.ok();
            };
            run_server(app, listener, shutdown).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            state,
            shutdown: Some(shutdown_tx),
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Services sharing the server's database, for seeding data
    pub fn context(&self) -> &ServiceContext {
        self.state.service_context()
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with an `Origin` header
    pub async fn get_from_origin(&self, path: &str, origin: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).header("Origin", origin).send().await?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send(()).ok();
        }
    }
}

/// Apply the schema once per test process
async fn ensure_schema(state: &AppState) -> Result<()> {
    SCHEMA
        .get_or_try_init(|| async {
            sqlx::raw_sql(SCHEMA_SQL)
                .execute(state.database().pool())
                .await
                .map(|_| ())
        })
        .await?;
    Ok(())
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
