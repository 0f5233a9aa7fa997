use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `names` table.
///
/// `id` and `created_at` are assigned by the database at insertion and never
/// change afterward; records are only ever created and deleted. Ids are
/// strictly increasing and never reused, and insertion order keeps
/// `created_at` non-decreasing with `id`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Name {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
