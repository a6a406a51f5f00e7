use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid question id: {0}")]
    InvalidQuestionId(i64),

    #[error("Choice must be 'A' or 'B'")]
    InvalidChoice(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidQuestionId(_) => (
                StatusCode::BAD_REQUEST,
                "INVALID_QUESTION_ID",
                self.to_string(),
            ),
            AppError::InvalidChoice(choice) => {
                tracing::debug!("Rejected choice {choice:?}");
                (StatusCode::BAD_REQUEST, "INVALID_CHOICE", self.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::PersistenceUnavailable(msg) => {
                tracing::warn!("Persistence unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "PERSISTENCE_UNAVAILABLE",
                    "The result store is not available".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
