//! Prompt templates — wraps the user message in category-specific
//! instructions before it is forwarded to the backend.
//!
//! Templating is optional: when disabled in config, the raw message is sent
//! as-is (the behavior of earlier deployments).

use crate::selector::Category;

const CODE_INSTRUCTIONS: &str =
    "You are a coding assistant. Reply with clean, working code only. \
     No explanations, no commentary.";

const CHAT_INSTRUCTIONS: &str =
    "You are a helpful assistant. Keep answers brief and direct.";

/// Build the prompt sent to the backend for one message.
///
/// The user message always appears verbatim as the suffix, after a literal
/// `User:` label. Pure function — no I/O.
pub fn compose_prompt(category: Category, user_message: &str) -> String {
    let instructions = match category {
        Category::Code => CODE_INSTRUCTIONS,
        Category::Chat => CHAT_INSTRUCTIONS,
    };
    format!("{instructions}\n\nUser: {user_message}")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_verbatim_suffix() {
        let message = "write a function to reverse a string";
        let prompt = compose_prompt(Category::Code, message);
        assert!(prompt.ends_with(message));
        assert!(prompt.contains("User: write a function to reverse a string"));
    }

    #[test]
    fn test_categories_use_different_instructions() {
        let code = compose_prompt(Category::Code, "hello");
        let chat = compose_prompt(Category::Chat, "hello");
        assert_ne!(code, chat);
        assert!(code.contains("coding assistant"));
        assert!(chat.contains("helpful assistant"));
    }

    #[test]
    fn test_empty_message_keeps_label() {
        let prompt = compose_prompt(Category::Chat, "");
        assert!(prompt.ends_with("User: "));
    }
}
