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
    /// An operation that needs an active session was called without one, or
    /// an answer was submitted after the last question.
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidState(msg) => (StatusCode::BAD_REQUEST, "INVALID_STATE", *msg),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_maps_to_bad_request() {
        let response = AppError::InvalidState("no active interview").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
