//! # Catalog API
//!
//! HTTP server for product CRUD over a file-based SQLite store.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Catalog API Server                             │
//! │                                                                         │
//! │  env config ──► SQLite pool + schema ──► axum router ──► serve (8080)  │
//! │                                                              │          │
//! │                                    ctrl-c / SIGTERM ─────────┘          │
//! │                                    (graceful shutdown)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_api::{routes, ApiConfig, AppState};
use catalog_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting catalog API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        path = %config.database_path.display(),
        port = config.http_port,
        "Configuration loaded"
    );

    // Connect to the store; a failed open or bootstrap aborts startup
    let db = Database::new(
        DbConfig::new(&config.database_path).max_connections(config.db_max_connections),
    )
    .await?;
    info!("Connected to SQLite, schema ready");

    // Shared state: handlers see the store only through the trait
    let state = AppState {
        store: Arc::new(db.products()),
    };
    let app = routes::app(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
