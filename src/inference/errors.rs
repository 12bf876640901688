//! Inference error types.
//!
//! All errors implement `std::error::Error` via `thiserror` and carry the
//! context needed for meaningful log entries.

use thiserror::Error;

/// Errors that can occur during an inference call.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// TCP/HTTP connection to the backend failed.
    #[error("connection failed to {endpoint}: {reason}")]
    ConnectionFailed { endpoint: String, reason: String },

    /// The backend did not respond within the configured timeout.
    #[error("inference timeout after {duration_secs}s")]
    Timeout { duration_secs: u64 },

    /// Non-2xx HTTP response from the backend.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be decoded as JSON.
    #[error("invalid response body: {reason}")]
    InvalidResponse { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = InferenceError::Http {
            status: 404,
            body: "model not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: model not found");

        let err = InferenceError::Timeout { duration_secs: 180 };
        assert!(err.to_string().contains("180"));
    }
}
