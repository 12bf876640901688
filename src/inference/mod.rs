//! Inference client — Ollama generate API client.
//!
//! Handles all communication with the local inference backend: one blocking
//! (awaited) HTTP POST per request, bounded by a configured timeout, with no
//! retries. Which model answers is decided upstream by the selector; this
//! module only speaks the wire protocol.

pub mod client;
pub mod errors;
pub mod types;

pub use client::InferenceClient;
pub use errors::InferenceError;
