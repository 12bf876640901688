//! Shared application state.

use std::sync::{Arc, Mutex};

use crate::config::RelayConfig;
use crate::inference::InferenceClient;
use crate::selector::ModelSelector;
use crate::store::ChatStore;

/// State shared across request handlers.
///
/// Everything here is initialized once at startup and read-only for the
/// process lifetime, except the store handle: the mutex serializes access to
/// the underlying SQLite connection (individual operations are small and
/// fast, so handlers hold the lock only for the duration of one call).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ChatStore>>,
    pub inference: Arc<InferenceClient>,
    pub selector: Arc<ModelSelector>,
    /// Whether prompts are wrapped in category templates before forwarding.
    pub prompt_templates: bool,
}

impl AppState {
    pub fn new(config: &RelayConfig, store: ChatStore, inference: InferenceClient) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            inference: Arc::new(inference),
            selector: Arc::new(ModelSelector::new(&config.chat_model, &config.code_model)),
            prompt_templates: config.prompt_templates,
        }
    }
}
