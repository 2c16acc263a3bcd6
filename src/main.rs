//! Webinars API server.
//!
//! Loads configuration, connects to PostgreSQL, wires the use cases to the
//! HTTP router and serves until Ctrl+C or SIGTERM.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use webinars::adapters::http::{self, AuthState, WebinarHandlers};
use webinars::adapters::postgres::{self, PostgresWebinarRepository};
use webinars::adapters::{StaticTokenValidator, SystemClock, UuidIdGenerator};
use webinars::application::{OrganizeWebinarHandler, UpdateSeatsHandler};
use webinars::config::{AppConfig, LogFormat, ServerConfig};
use webinars::ports::WebinarRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    tracing::info!(
        listen = %config.server.listen,
        database = %config.database.redacted_url(),
        "Configuration loaded"
    );

    // Persistence
    let pool = postgres::connect(&config.database).await?;
    if config.database.run_migrations {
        postgres::run_migrations(&pool).await?;
        tracing::info!("Migrations applied");
    }
    let repository: Arc<dyn WebinarRepository> = Arc::new(PostgresWebinarRepository::new(pool));

    // Use cases
    let policy = config.webinars.policy()?;
    let organize = OrganizeWebinarHandler::new(
        repository.clone(),
        Arc::new(UuidIdGenerator),
        Arc::new(SystemClock),
    )
    .with_policy(policy);
    let update_seats = UpdateSeatsHandler::new(repository).with_policy(policy);
    let handlers = WebinarHandlers::new(Arc::new(organize), Arc::new(update_seats));

    // Auth
    let tokens = config.auth.token_entries()?;
    if tokens.is_empty() {
        tracing::warn!("No auth tokens configured; every webinar request will be rejected");
    }
    let validator: AuthState = Arc::new(StaticTokenValidator::from_pairs(tokens));

    let app = http::router(handlers, validator, config.server.request_timeout());

    let addr = config.server.listen;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Webinars API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down gracefully");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_filter));

    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
