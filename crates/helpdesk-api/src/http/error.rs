//! Handler error type mapping to HTTP status codes.
//!
//! Errors keep the same reply-shaped JSON body as successful responses, so
//! a lenient client can render `reply` from any outcome; stricter clients
//! key off the status code and show their own fallback text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use helpdesk_types::reply::MatchMethod;

/// Fixed body text of a 500 response.
pub const SERVER_ERROR_REPLY: &str = "Server error. Please try again later.";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed request payload.
    BadRequest(String),
    /// Unexpected failure inside a handler.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, reply) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_REPLY.to_string())
            }
        };

        let body = json!({
            "reply": reply,
            "score": 0.0,
            "method": MatchMethod::Error,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_maps_to_500_with_fixed_reply() {
        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("missing payload".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
