//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresWebinarRepository` - Webinar persistence
//! - `connect` / `run_migrations` - Pool construction and schema setup

mod webinar_repository;

pub use webinar_repository::PostgresWebinarRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::domain::foundation::RepositoryError;

/// Opens a connection pool sized and timed according to `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, RepositoryError> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
        .map_err(|e| RepositoryError::database("connect", e))
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| RepositoryError::database("migrate", e))
}
