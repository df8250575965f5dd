use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use persons_core::error::CoreError;
use serde_json::json;

/// Message returned for every 500 response. Details only go to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{"message": ...}` envelope,
/// or `{"message": ..., "errors": {...}}` for validation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `persons_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    not_found(entity)
                }
                CoreError::Validation { message, errors } => (
                    StatusCode::BAD_REQUEST,
                    json!({ "message": message, "errors": errors }),
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn not_found(entity: &str) -> (StatusCode, serde_json::Value) {
    (
        StatusCode::NOT_FOUND,
        json!({ "message": format!("{entity} not found") }),
    )
}

fn internal() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "message": INTERNAL_ERROR_MESSAGE }),
    )
}
