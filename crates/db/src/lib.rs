//! PostgreSQL persistence for the gas-cylinder booking portal.
//!
//! - [`models`] — `FromRow` entity structs and create/update DTOs.
//! - [`repositories`] — async CRUD repositories, plus the allocation
//!   ledger ([`repositories::LedgerRepo`]), the only writer of the
//!   per-user cylinder counters and of booking status.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Maximum connections in the pool.
const MAX_CONNECTIONS: u32 = 20;

/// Upper bound on waiting for a pooled connection. A saturated pool must
/// surface an error to the caller rather than block it indefinitely.
const ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
