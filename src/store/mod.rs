//! Chat store — append-and-read-only persistence for exchanges.
//!
//! Every request/response pair is written once and never updated or deleted.
//! Retrieval returns the whole collection newest-first. Backed by SQLite
//! (`rusqlite` in synchronous mode behind a mutex in the app state).

pub mod db;
pub mod errors;
pub mod types;

pub use db::ChatStore;
pub use errors::StoreError;
pub use types::{ChatExchange, NewExchange};
