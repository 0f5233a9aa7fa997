use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application-specific errors with HTTP status code mappings
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected request payload; the message is returned to the caller.
    #[error("{0}")]
    Validation(String),

    /// Pool checkout or statement failure. Not recovered here: the request
    /// unwinds to a 500 and the connection still returns to the pool.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected payload: {}", msg);
                (StatusCode::BAD_REQUEST, msg.as_str())
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}
