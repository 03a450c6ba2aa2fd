use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::generation::GenerationError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`GenerationError`] for generation failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the form `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A generation failure from [`crate::generation`].
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Generation(err) => match err {
                GenerationError::MissingInput => {
                    (StatusCode::BAD_REQUEST, "MISSING_INPUT", err.to_string())
                }
                GenerationError::QuotaExhausted => {
                    (StatusCode::PAYMENT_REQUIRED, "QUOTA_EXHAUSTED", err.to_string())
                }
                GenerationError::MalformedResponse(source) => {
                    tracing::error!(error = %source, "Model returned malformed JSON");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "MALFORMED_RESPONSE",
                        err.to_string(),
                    )
                }
                GenerationError::Unexpected(source) => {
                    tracing::error!(error = %source, "Upstream generation error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UPSTREAM_ERROR",
                        err.to_string(),
                    )
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
