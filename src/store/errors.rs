//! Chat store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {reason}")]
    Database { reason: String },

    /// A stored row could not be decoded back into an exchange.
    #[error("corrupt record '{id}': {reason}")]
    CorruptRecord { id: String, reason: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database {
            reason: e.to_string(),
        }
    }
}
