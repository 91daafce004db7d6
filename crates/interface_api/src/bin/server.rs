//! Car Insurance - API Server Binary
//!
//! Starts the HTTP API and the background policy expiration sweep.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin car-insurance-api
//!
//! # Run with environment variables
//! API_PORT=9090 API_DATABASE_URL=postgres://... cargo run --bin car-insurance-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_DATABASE_MAX_CONNECTIONS` - Pool size limit (default: 10)
//! * `API_DATABASE_MIN_CONNECTIONS` - Idle connections kept open (default: 2)
//! * `API_DATABASE_ACQUIRE_TIMEOUT_SECS` - Wait for a pooled connection (default: 30)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_SWEEP_INTERVAL_SECS` - Pause between expiration sweeps (default: 5)
//! * `API_EXPIRY_DETECTION_WINDOW_SECS` - Notification window after expiry (default: 3600)
//! * `API_EXPIRY_NOTIFICATION_LAG_SECS` - Expiry offset from midnight of the end date (default: 86400)
//! * `API_CLAIM_VALIDATION` - `strict` or `permissive` (default: strict)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_policy::{ExpirationSweep, TracingNotificationSink};
use domain_vehicle::CarService;
use infra_db::{create_pool, run_migrations, PostgresInsuranceAdapter};
use interface_api::{config::ApiConfig, create_router, AppState};

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded or is invalid
/// - Database connection or migrations fail
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("failed to load configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        claim_validation = %config.claim_validation,
        "Starting Car Insurance API Server"
    );

    let sweep_config = config.sweep_config().context("invalid expiration sweep settings")?;

    let pool = create_pool(config.database_config()).await?;
    run_migrations(&pool).await?;

    let store = Arc::new(PostgresInsuranceAdapter::new(pool));
    let service = CarService::new(store.clone(), store.clone(), store.clone())
        .with_claim_validation(config.claim_validation);

    // Background expiration sweep, stopped after the server drains
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweep = ExpirationSweep::new(store.clone(), Arc::new(TracingNotificationSink), sweep_config)
        .spawn(shutdown_rx)?;

    let app = create_router(AppState::new(service, store, config.clone()));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped, stopping expiration sweep");
    // The sweep also stops if the sender is dropped, so a send error is harmless
    let _ = shutdown_tx.send(true);
    if let Err(e) = sweep.await {
        tracing::error!(error = %e, "Expiration sweep task failed");
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
