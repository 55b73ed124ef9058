use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use groups_core::pagination::ParameterError;
use groups_core::storage::RepositoryError;

/// Failures surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed `limit` or `nextKey`. The response body never names the
    /// offending parameter; the variant is only for the logs.
    #[error(transparent)]
    InvalidParameters(#[from] ParameterError),

    /// Store failure during scan or insert. The caller only sees an opaque
    /// 500; details stay in the logs.
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidParameters(err) => {
                tracing::warn!(error = %err, "Failed to parse query parameters");
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "error": "Invalid parameters" })),
                )
                    .into_response()
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store operation failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
