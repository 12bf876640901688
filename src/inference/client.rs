//! HTTP client for the Ollama generate endpoint.
//!
//! A single attempt either succeeds or the whole request fails — there is no
//! retry or fallback. Generation on local hardware can be slow, so the total
//! request timeout is configurable and defaults to 180 seconds.

use std::time::Duration;

use reqwest::Client as HttpClient;

use super::errors::InferenceError;
use super::types::{GenerateRequest, GenerateResponse};

/// TCP connection timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the local inference backend.
///
/// Holds a long-lived `reqwest` client; created once at startup and shared
/// read-only across requests.
pub struct InferenceClient {
    http: HttpClient,
    base_url: String,
    timeout_secs: u64,
}

impl InferenceClient {
    /// Create a client for the given backend base URL.
    ///
    /// Does NOT check connectivity — that happens on the first request.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, InferenceError> {
        let http = HttpClient::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed {
                endpoint: base_url.to_string(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    /// The backend base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run one generation request and return the produced text.
    ///
    /// An empty string is a valid outcome: the backend omitting the
    /// `response` field is not treated as a failure.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String, InferenceError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            stream: false,
        };

        tracing::info!(
            url = %url,
            model = %body.model,
            prompt_chars = body.prompt.len(),
            "sending generate request"
        );

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InferenceError::Timeout {
                        duration_secs: self.timeout_secs,
                    }
                } else {
                    InferenceError::ConnectionFailed {
                        endpoint: url.clone(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(InferenceError::Http {
                status: status.as_u16(),
                body: body_text,
            });
        }

        // The timeout also bounds the body read, so a stall here still
        // surfaces as Timeout rather than InvalidResponse.
        let decoded: GenerateResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                InferenceError::Timeout {
                    duration_secs: self.timeout_secs,
                }
            } else {
                InferenceError::InvalidResponse {
                    reason: e.to_string(),
                }
            }
        })?;

        Ok(decoded.response)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = InferenceClient::new("http://localhost:11434/", 30).unwrap();
        assert_eq!(client.base_url(), "http://localhost:11434");
    }

    #[test]
    fn test_base_url_kept_as_is_without_slash() {
        let client = InferenceClient::new("http://localhost:11434", 30).unwrap();
        assert_eq!(client.base_url(), "http://localhost:11434");
    }
}
