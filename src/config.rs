//! Service configuration.
//!
//! Reads an optional YAML file and resolves `${VAR}` / `${VAR:-default}`
//! environment references in it. Every field has a default matching the
//! stock local setup (Ollama on `localhost:11434`), so the service starts
//! with no config file at all.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Interface the HTTP server binds to.
    pub bind_host: String,
    pub bind_port: u16,
    /// Base URL of the inference backend.
    pub backend_url: String,
    /// Total per-request timeout for inference calls, in seconds.
    pub timeout_secs: u64,
    /// Model answering general questions.
    pub chat_model: String,
    /// Model answering coding questions.
    pub code_model: String,
    /// SQLite database path. Defaults to the platform data directory.
    pub db_path: Option<String>,
    /// Wrap messages in category instruction templates before forwarding.
    /// Disable to forward the raw message (earlier deployments' behavior).
    pub prompt_templates: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            bind_port: 8000,
            backend_url: "http://localhost:11434".to_string(),
            timeout_secs: 180,
            chat_model: "life4living/ChatGPT".to_string(),
            code_model: "deepseek-coder".to_string(),
            db_path: None,
            prompt_templates: true,
        }
    }
}

impl RelayConfig {
    /// Load configuration from the default locations.
    ///
    /// Resolution order: `CHAT_RELAY_CONFIG` env var (must exist when set),
    /// then `relay.yaml` in the working directory, then built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var("CHAT_RELAY_CONFIG") {
            return Self::load_from(Path::new(&path));
        }

        let default_path = Path::new("relay.yaml");
        if default_path.exists() {
            return Self::load_from(default_path);
        }

        Ok(Self::default())
    }

    /// Load and parse a specific configuration file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let interpolated = interpolate_env_vars(&raw);

        serde_yaml::from_str(&interpolated).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Resolve the database path, defaulting to the platform data directory
    /// (created if needed).
    pub fn resolve_db_path(&self) -> PathBuf {
        if let Some(ref path) = self.db_path {
            return PathBuf::from(path);
        }

        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chat-relay");
        let _ = std::fs::create_dir_all(&dir);
        dir.join("chats.db")
    }

    /// The `host:port` string the server listens on.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.bind_port)
    }
}

// ─── Env-var interpolation ───────────────────────────────────────────────────

/// Replace `${VAR}` and `${VAR:-default}` in a string.
fn interpolate_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'
            let mut var_expr = String::new();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                var_expr.push(c);
            }
            result.push_str(&resolve_var_expr(&var_expr));
        } else {
            result.push(ch);
        }
    }

    result
}

/// Resolve a variable expression like `VAR` or `VAR:-default`.
fn resolve_var_expr(expr: &str) -> String {
    if let Some(idx) = expr.find(":-") {
        let var_name = &expr[..idx];
        let default = &expr[idx + 2..];
        std::env::var(var_name).unwrap_or_else(|_| default.to_string())
    } else {
        std::env::var(expr).unwrap_or_default()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_setup() {
        let config = RelayConfig::default();
        assert_eq!(config.backend_url, "http://localhost:11434");
        assert_eq!(config.timeout_secs, 180);
        assert_eq!(config.code_model, "deepseek-coder");
        assert!(config.prompt_templates);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let yaml = "backend_url: \"http://127.0.0.1:9999\"\ntimeout_secs: 30\n";
        let config: RelayConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.backend_url, "http://127.0.0.1:9999");
        assert_eq!(config.timeout_secs, 30);
        // Untouched fields come from Default
        assert_eq!(config.chat_model, "life4living/ChatGPT");
        assert_eq!(config.bind_port, 8000);
    }

    #[test]
    fn test_interpolate_env_vars_with_default() {
        std::env::remove_var("__TEST_RELAY_MISSING__");
        let input = "${__TEST_RELAY_MISSING__:-http://fallback:1234}";
        assert_eq!(interpolate_env_vars(input), "http://fallback:1234");
    }

    #[test]
    fn test_interpolate_env_vars_with_value() {
        std::env::set_var("__TEST_RELAY_SET__", "http://custom:5678");
        let input = "${__TEST_RELAY_SET__:-http://fallback:1234}";
        assert_eq!(interpolate_env_vars(input), "http://custom:5678");
        std::env::remove_var("__TEST_RELAY_SET__");
    }

    #[test]
    fn test_interpolate_no_vars() {
        let input = "plain text with no variables";
        assert_eq!(interpolate_env_vars(input), input);
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        let result = RelayConfig::load_from(Path::new("/nonexistent/relay.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_explicit_db_path_wins() {
        let config = RelayConfig {
            db_path: Some("/tmp/custom.db".to_string()),
            ..RelayConfig::default()
        };
        assert_eq!(config.resolve_db_path(), PathBuf::from("/tmp/custom.db"));
    }
}
