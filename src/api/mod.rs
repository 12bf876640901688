//! HTTP surface.
//!
//! CORS is wide open on purpose — the service fronts a dev-mode browser
//! frontend and makes no origin-based access decisions.

pub mod chat;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(chat::health))
        .route("/chat", post(chat::submit))
        .route("/chats", get(chat::history))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
