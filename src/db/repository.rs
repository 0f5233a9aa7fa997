use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::NameStore;
use crate::db::models::Name;
use crate::error::AppError;

/// PostgreSQL-backed [`NameStore`].
///
/// Each operation runs exactly one statement through one pooled connection;
/// PostgreSQL commits every statement synchronously, and the pool takes the
/// connection back whether the statement succeeded or failed. Id assignment
/// is delegated to the `BIGSERIAL` column, so concurrent creates never
/// collide.
#[derive(Clone)]
pub struct PgNameStore {
    pool: PgPool,
}

impl PgNameStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NameStore for PgNameStore {
    async fn ping(&self) -> Result<bool, AppError> {
        let value: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;

        Ok(value == 1)
    }

    async fn list(&self) -> Result<Vec<Name>, AppError> {
        let names =
            sqlx::query_as::<_, Name>("SELECT id, name, created_at FROM names ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(names)
    }

    async fn create(&self, name: &str) -> Result<Name, AppError> {
        let record = sqlx::query_as::<_, Name>(
            "INSERT INTO names (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = record.id, "Inserted name record");

        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM names WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        // Zero rows affected is still success: the response never
        // distinguishes "deleted" from "was never there"
        tracing::debug!(
            id,
            rows_affected = result.rows_affected(),
            "Deleted name record"
        );

        Ok(())
    }
}
