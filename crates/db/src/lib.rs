//! Persistence for users and check-in logs.
//!
//! - [`config`]: connection settings from the environment.
//! - [`models`] / [`repositories`]: row types and zero-sized query helpers
//!   over `PgPool`.
//! - [`store`]: the [`Storage`](store::Storage) traits handlers depend on,
//!   plus the PostgreSQL backend. [`memory`] provides an in-process backend.

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::DbConfig;
pub use error::StoreError;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool and open its first connection.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(config.connect_options()?)
        .await
}

/// Create a connection pool, retrying on failure.
///
/// Makes up to `config.connect_attempts` attempts with a fixed
/// `config.connect_retry_delay()` between them, and returns the last error
/// once they are exhausted.
pub async fn connect_with_retry(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    retry_fixed(config.connect_attempts, config.connect_retry_delay(), || {
        create_pool(config)
    })
    .await
}

/// Run `op` until it succeeds or `attempts` tries have failed.
pub async fn retry_fixed<T, E, F, Fut>(attempts: u32, delay: Duration, mut op: F) -> Result<T, E>
where
    E: std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts,
                    retry_in_secs = delay.as_secs(),
                    error = %e,
                    "Database connection attempt failed, retrying",
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(attempt, error = %e, "Database connection attempts exhausted");
                return Err(e);
            }
        }
    }
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
