pub mod names;

use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get},
};
use serde_json::json;

use crate::AppState;
use crate::error::AppError;

/// Assemble the full HTTP surface over the injected store.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .route("/api/names", get(names::list_names).post(names::create_name))
        .route("/api/names/{id}", delete(names::remove_name))
        .with_state(state)
}

/// Landing response pointing callers at the API surface
async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Backend API. Use /api/names" }))
}

/// Health check
///
/// Runs `SELECT 1` through a pooled connection and reports whether the
/// store answered. A store failure is not softened to `db: false`; it
/// propagates as a 500 like any other statement failure.
async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let db = state.store.ping().await?;

    Ok(Json(json!({ "status": "ok", "db": db })))
}
