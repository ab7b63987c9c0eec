use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::OrderError;

/// Central error type for the gateway HTTP surface.
///
/// Validation errors keep their messages through to the response;
/// storage and other internal failures are logged in full and answered
/// with a generic message so internals never leak to callers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::Order(OrderError::Storage(err)) => {
                tracing::error!(error = %err, "order persistence failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "STORAGE_ERROR",
                )
            }
            AppError::Order(err) => (StatusCode::BAD_REQUEST, err.to_string(), "BAD_REQUEST"),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_ERROR",
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}
