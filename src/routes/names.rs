use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;
use crate::db::models::Name;
use crate::error::AppError;
use crate::validation::validate_name;

/// Request body for POST /api/names
#[derive(Debug, Default, Deserialize)]
pub struct CreateNameRequest {
    #[serde(default)]
    pub name: String,
}

/// List all name records
///
/// # Endpoint
/// GET /api/names
///
/// # Returns
/// 200 with every record as a JSON array, ascending by id (insertion order)
pub async fn list_names(State(state): State<AppState>) -> Result<Json<Vec<Name>>, AppError> {
    let names = state.store.list().await?;

    Ok(Json(names))
}

/// Create a name record
///
/// # Endpoint
/// POST /api/names, body `{"name": "..."}`
///
/// The body is parsed leniently: a missing, malformed, or field-less body
/// degrades to an empty name and is rejected by validation, never with a
/// body-shape error. Validation happens exactly once, here; a rejected name
/// is never sent to the store.
///
/// # Returns
/// - 201 `{"message": "Created"}` on success
/// - 400 `{"error": ...}` when validation rejects the name
pub async fn create_name(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let payload: CreateNameRequest = serde_json::from_slice(&body).unwrap_or_default();

    let name = validate_name(&payload.name)?;
    let record = state.store.create(&name).await?;

    tracing::info!(id = record.id, name = %record.name, "Created name record");

    Ok((StatusCode::CREATED, Json(json!({ "message": "Created" }))))
}

/// Delete a name record
///
/// # Endpoint
/// DELETE /api/names/{id}
///
/// Idempotent by design: the response is the same 200 whether or not a row
/// matched, so callers can retry without tracking existence. The id must
/// still be a well-formed integer; anything else fails path extraction.
pub async fn remove_name(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.store.delete(id).await?;

    Ok(Json(json!({ "message": "Deleted" })))
}
