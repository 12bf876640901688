//! Persisted exchange records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::selector::Category;

/// One stored user-message/bot-reply pair.
///
/// Immutable once written — the store exposes no update or delete. The
/// serialized field names are the wire shape of `GET /chats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatExchange {
    /// Store-assigned opaque identifier.
    pub id: String,
    pub model_type: Category,
    pub model_used: String,
    pub user_message: String,
    /// May be empty — the backend returning no content is not an error.
    pub bot_reply: String,
    /// Captured in UTC at the moment the inference result arrived.
    pub created_at: DateTime<Utc>,
}

/// A not-yet-persisted exchange. The store assigns the id on insert.
#[derive(Debug, Clone)]
pub struct NewExchange {
    pub model_type: Category,
    pub model_used: String,
    pub user_message: String,
    pub bot_reply: String,
    pub created_at: DateTime<Utc>,
}
