//! HTTP error mapping.
//!
//! Every failure surfaces as the same `{"error": message}` body the original
//! frontend consumes; the status code is the only thing that distinguishes
//! the failure class (validation vs backend vs store).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::inference::InferenceError;
use crate::store::StoreError;

/// API error: a status code plus the message rendered in the uniform body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

impl From<InferenceError> for ApiError {
    fn from(err: InferenceError) -> Self {
        let status = match err {
            InferenceError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            InferenceError::ConnectionFailed { .. }
            | InferenceError::Http { .. }
            | InferenceError::InvalidResponse { .. } => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}
