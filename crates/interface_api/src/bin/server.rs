//! Campaign API Server Binary
//!
//! Starts the HTTP API server. Before binding the listener it applies
//! migrations and, unless disabled, writes the sample dataset.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin campaign-api
//!
//! # Run with environment variables
//! API_PORT=8080 DATABASE_URL=postgres://... cargo run --bin campaign-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` / `DATABASE_URL` - PostgreSQL connection string
//! * `API_DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_SEED_ON_STARTUP` - Write the sample dataset at startup (default: true)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresCampaignAdapter, TestDataInitializer};
use interface_api::{config::ApiConfig, create_router, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the database is
/// unreachable, migrations or seeding fail, or the address cannot be bound
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        seed_on_startup = config.seed_on_startup,
        "Starting Campaign API Server"
    );

    let pool = create_pool(
        DatabaseConfig::new(config.database_url.as_str()).max_connections(config.db_max_connections),
    )
    .await
    .context("failed to connect to the database")?;

    run_migrations(&pool).await.context("failed to apply migrations")?;

    if config.seed_on_startup {
        TestDataInitializer::new(pool.clone())
            .run()
            .await
            .context("failed to seed test data")?;
    }

    let adapter = Arc::new(PostgresCampaignAdapter::new(pool));
    let app = create_router(AppState::new(adapter));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level when set.
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
