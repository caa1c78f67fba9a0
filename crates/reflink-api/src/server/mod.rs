//! Server setup and initialization
//!
//! Provides the application builder, the server runner and graceful shutdown.

use std::net::SocketAddr;

use axum::Router;
use reflink_common::{AppConfig, AppError};
use reflink_db::{Database, DatabaseConfig};
use reflink_service::ServiceContext;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Connect the database and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!(
        max_connections = config.database.max_connections,
        "Connecting to PostgreSQL..."
    );
    let database = Database::connect(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    Ok(AppState::new(ServiceContext::postgres(database), config))
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn run_server<F>(app: Router, listener: TcpListener, shutdown: F) -> Result<(), AppError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let database = state.database().clone();
    let app = create_app(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    let result = run_server(app, listener, shutdown_signal()).await;

    database.close().await;
    info!("Database pool closed");

    result
}

/// Resolves on Ctrl-C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
