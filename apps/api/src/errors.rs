use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Response bodies are the flat `{"error": "..."}` shape the application form
/// expects from the proxy.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Workable signals rate limiting through an `error` field in an otherwise
    /// 200 questions response. Fixed user-facing message, no retry.
    #[error("Workable rate limit hit")]
    RateLimited,

    /// An answer selected a choice label the vendor question does not offer.
    /// Surfaced instead of forwarding a null choice id to the ATS.
    #[error("choice '{choice}' does not match any option for question '{question}'")]
    UnmappedChoice { question: String, choice: String },

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Exceeded Workable API rate limits. Try again in a few seconds.".to_string(),
            ),
            AppError::UnmappedChoice { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            AppError::Upstream(e) => {
                tracing::error!("Upstream Workable error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Upstream request to Workable failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
