//! Model selection — decides which model family answers a message.
//!
//! A fixed keyword list classifies each message as a coding question or a
//! general chat question. The heuristic is deliberately simple: it needs a
//! boolean outcome, not a ranking, so the first match (any match) settles it.

use serde::{Deserialize, Serialize};

/// Keywords that mark a message as a coding question.
///
/// Matching is case-insensitive and substring-based on purpose: "decoder"
/// matches "code". Switching to token-boundary matching would change which
/// model answers existing traffic.
const CODE_KEYWORDS: &[&str] = &[
    "code", "program", "function", "bug", "error", "exception",
    "python", "java", "c++", "c program", "javascript", "react",
    "node", "api", "sql", "html", "css", "algorithm", "loop",
    "array", "string", "class", "object", "compile", "debug",
];

/// Which model family answers a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Chat,
    Code,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Chat => "chat",
            Category::Code => "code",
        }
    }

    /// Parse the wire representation. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "chat" => Some(Category::Chat),
            "code" => Some(Category::Code),
            _ => None,
        }
    }
}

/// Decide whether a message is a coding question.
///
/// Pure and deterministic — no I/O, no state.
pub fn is_code_question(message: &str) -> bool {
    let lowered = message.to_lowercase();
    CODE_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// The outcome of model selection for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelChoice {
    /// Identifier of the model to invoke on the backend.
    pub model: String,
    pub category: Category,
}

/// Per-category model identifiers, resolved from config at startup.
#[derive(Debug, Clone)]
pub struct ModelSelector {
    chat_model: String,
    code_model: String,
}

impl ModelSelector {
    pub fn new(chat_model: impl Into<String>, code_model: impl Into<String>) -> Self {
        Self {
            chat_model: chat_model.into(),
            code_model: code_model.into(),
        }
    }

    /// Classify a message and resolve the model that should answer it.
    pub fn select(&self, message: &str) -> ModelChoice {
        let category = if is_code_question(message) {
            Category::Code
        } else {
            Category::Chat
        };
        self.choice_for(category)
    }

    /// Resolve the model for an explicitly requested category.
    pub fn choice_for(&self, category: Category) -> ModelChoice {
        let model = match category {
            Category::Chat => self.chat_model.clone(),
            Category::Code => self.code_model.clone(),
        };
        ModelChoice { model, category }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
