//! chat-relay — a single-endpoint HTTP relay for local LLM chat.
//!
//! Accepts a user message, routes it to a "chat" or "code" model on a local
//! Ollama instance, persists the exchange, and returns the generated reply.

pub mod api;
pub mod config;
pub mod error;
pub mod inference;
pub mod prompt;
pub mod selector;
pub mod state;
pub mod store;
