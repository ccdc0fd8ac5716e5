//! OpenAI-compatible chat-completions backend.
//!
//! Talks to any endpoint that implements the OpenAI chat completions API
//! format (LM Studio, vLLM, llama-server) via reqwest. Requests carry a
//! `response_format` json_schema directive so the server constrains the
//! model's output to the test schema.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::base::{ChatBackend, ChatReply, ChatRequest};
use crate::errors::ProviderError;

/// How much of an error body to keep for per-trial diagnostics.
const ERROR_BODY_PREVIEW: usize = 100;

/// Backend for one OpenAI-compatible `/chat/completions` URL.
pub struct OpenAICompatBackend {
    api_url: String,
    timeout: Duration,
    client: Client,
}

impl OpenAICompatBackend {
    /// Create a backend with a client-level timeout.
    ///
    /// The timeout covers the whole request, so a stalled generation
    /// surfaces as [`ProviderError::Timeout`] rather than hanging a trial.
    pub fn new(api_url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(timeout_secs);
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    /// Sibling `/models` URL for the configured completions endpoint.
    fn models_url(&self) -> String {
        match self.api_url.strip_suffix("/chat/completions") {
            Some(base) => format!("{}/models", base),
            None => format!("{}/models", self.api_url),
        }
    }

    fn classify_request_error(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            ProviderError::Connection(err.to_string())
        }
    }
}

/// Truncate a body for diagnostics, respecting char boundaries.
fn truncate_body(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        body.to_string()
    } else {
        let cut: String = body.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

#[async_trait]
impl ChatBackend for OpenAICompatBackend {
    async fn complete(&self, request: ChatRequest<'_>) -> Result<ChatReply, ProviderError> {
        let body = serde_json::json!({
            "model": request.model,
            "messages": [{"role": "user", "content": request.prompt}],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": request.schema_name,
                    "schema": request.schema,
                }
            },
        });

        debug!(model = request.model, url = %self.api_url, "sending completion request");

        let response = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify_request_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.classify_request_error(e))?;

        if !status.is_success() {
            warn!(model = request.model, status = status.as_u16(), "endpoint returned an error status");
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body: truncate_body(&text, ERROR_BODY_PREVIEW),
            });
        }

        let envelope: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| ProviderError::Connection(format!("response body is not JSON: {}", e)))?;

        let content = envelope
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| {
                ProviderError::Envelope("missing choices[0].message.content".to_string())
            })?
            .to_string();

        let completion_tokens = envelope
            .get("usage")
            .and_then(|usage| usage.get("completion_tokens"))
            .and_then(|tokens| tokens.as_f64());

        Ok(ChatReply {
            content,
            completion_tokens,
        })
    }

    async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
        let url = self.models_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body: truncate_body(&response.text().await.unwrap_or_default(), ERROR_BODY_PREVIEW),
            });
        }

        let envelope: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        let models = envelope
            .get("data")
            .and_then(|d| d.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|m| m.get("id").and_then(|id| id.as_str()))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(models)
    }
}
