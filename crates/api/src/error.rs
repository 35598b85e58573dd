use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gamevault_core::error::CoreError;
use serde_json::json;

/// Body message for every 500 response. Details only go to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Body message for a failed multipart upload.
pub const UPLOAD_ERROR_MESSAGE: &str = "Error uploading file";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gamevault_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store could not be reached or the query failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                // Not-found is plain text so the detail page reads "Game not found".
                CoreError::NotFound { entity, key } => {
                    tracing::debug!(entity, key = %key, "Lookup missed");
                    return (StatusCode::NOT_FOUND, format!("{entity} not found")).into_response();
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Upload(msg) => {
                    tracing::error!(error = %msg, "Error uploading file");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UPLOAD_ERROR",
                        UPLOAD_ERROR_MESSAGE.to_string(),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        INTERNAL_ERROR_MESSAGE.to_string(),
                    )
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
