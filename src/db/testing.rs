//! In-memory [`NameStore`] doubles for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::db::NameStore;
use crate::db::models::Name;
use crate::error::AppError;

/// Store double backed by a vector.
///
/// Mirrors the contract the handlers rely on: ids come from a counter and
/// are never reused, `created_at` never decreases, and deleting an unknown
/// id is a no-op.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    records: Vec<Name>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NameStore for MemoryStore {
    async fn ping(&self) -> Result<bool, AppError> {
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<Name>, AppError> {
        Ok(self.inner.lock().unwrap().records.clone())
    }

    async fn create(&self, name: &str) -> Result<Name, AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;

        let record = Name {
            id: inner.next_id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        inner.records.push(record.clone());

        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.inner
            .lock()
            .unwrap()
            .records
            .retain(|record| record.id != id);

        Ok(())
    }
}

/// Store double where every call fails, for exercising 5xx paths.
pub struct FailingStore;

#[async_trait]
impl NameStore for FailingStore {
    async fn ping(&self) -> Result<bool, AppError> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn list(&self) -> Result<Vec<Name>, AppError> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn create(&self, _name: &str) -> Result<Name, AppError> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn delete(&self, _id: i64) -> Result<(), AppError> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }
}
