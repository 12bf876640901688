//! Chat endpoints: submit, history, liveness.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::prompt::compose_prompt;
use crate::selector::Category;
use crate::state::AppState;
use crate::store::{ChatExchange, NewExchange};

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Optional category override ("chat" or "code"). When absent the
    /// keyword selector decides.
    #[serde(default)]
    pub model_type: Option<String>,
}

/// Response body for `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub model_used: String,
    pub model_type: Category,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /` — liveness marker.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Backend is running",
    })
}

/// `POST /chat` — the submit flow.
///
/// Select model, compose prompt, call the backend, persist, respond. There
/// is no retry and no rollback: a persistence failure after a successful
/// inference call fails the whole request and the reply is dropped.
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let choice = match req.model_type.as_deref() {
        Some(raw) => {
            let category = Category::parse(raw)
                .ok_or_else(|| ApiError::bad_request(format!("unknown model_type '{raw}'")))?;
            state.selector.choice_for(category)
        }
        None => state.selector.select(&req.message),
    };

    let prompt = if state.prompt_templates {
        compose_prompt(choice.category, &req.message)
    } else {
        req.message.clone()
    };

    let reply = state
        .inference
        .generate(&choice.model, &prompt)
        .await
        .map_err(|err| {
            tracing::warn!(model = %choice.model, error = %err, "inference call failed");
            ApiError::from(err)
        })?;

    let exchange = NewExchange {
        model_type: choice.category,
        model_used: choice.model.clone(),
        user_message: req.message,
        bot_reply: reply.clone(),
        created_at: Utc::now(),
    };

    let id = {
        let store = state
            .store
            .lock()
            .map_err(|_| ApiError::internal("store lock poisoned"))?;
        store.append(&exchange).map_err(|err| {
            tracing::error!(error = %err, "failed to persist exchange");
            ApiError::from(err)
        })?
    };

    tracing::info!(
        id = %id,
        model = %choice.model,
        category = choice.category.as_str(),
        reply_chars = reply.len(),
        "exchange stored"
    );

    Ok(Json(ChatResponse {
        reply,
        model_used: choice.model,
        model_type: choice.category,
    }))
}

/// `GET /chats` — the history flow. Whole collection, newest first.
pub async fn history(State(state): State<AppState>) -> Result<Json<Vec<ChatExchange>>, ApiError> {
    let exchanges = {
        let store = state
            .store
            .lock()
            .map_err(|_| ApiError::internal("store lock poisoned"))?;
        store.list_all().map_err(|err| {
            tracing::error!(error = %err, "failed to load chat history");
            ApiError::from(err)
        })?
    };

    Ok(Json(exchanges))
}
