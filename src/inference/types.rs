//! Wire types for the Ollama generate API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    /// Always `false` — the relay does not consume incremental output.
    pub stream: bool,
}

/// Response body from the backend.
///
/// Ollama includes timing and token-count fields we ignore. A body without
/// a `response` field decodes to an empty string: the backend declining to
/// produce text is not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}

// ─── Tests ───────────────────────────────────────────────────────────────────
