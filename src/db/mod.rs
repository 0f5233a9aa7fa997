pub mod models;
pub mod repository;

#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::Config;
use crate::db::models::Name;
use crate::error::AppError;

/// Storage operations behind the HTTP handlers.
///
/// The handler layer is written against this trait rather than a concrete
/// pool, so the store is an injected resource: production wires in
/// [`repository::PgNameStore`], tests substitute an in-memory double.
#[async_trait]
pub trait NameStore: Send + Sync + 'static {
    /// Round-trip check that the store answers queries.
    async fn ping(&self) -> Result<bool, AppError>;

    /// All records, ascending by id.
    async fn list(&self) -> Result<Vec<Name>, AppError>;

    /// Insert a validated name; the store assigns `id` and `created_at`.
    async fn create(&self, name: &str) -> Result<Name, AppError>;

    /// Delete by id. Deleting an id that does not exist is not an error.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// Open the connection pool against the configured database.
///
/// The pool holds between 1 and `db_max_connections` connections. The first
/// connection is established here, so an unreachable database fails startup
/// instead of the first request; the rest are created on demand and reused.
/// Checking one out blocks only the requesting task, and the pool reclaims
/// it on every exit path.
pub async fn init_pool(config: &Config) -> anyhow::Result<PgPool> {
    tracing::info!(
        max_connections = config.db_max_connections,
        "Initializing database connection pool"
    );

    let pool = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(config.db_max_connections)
        .connect(&config.database_url())
        .await?;

    tracing::info!("Database connection pool initialized successfully");

    Ok(pool)
}
