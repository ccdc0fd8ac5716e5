//! Base chat-completions backend interface.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ProviderError;

/// One structured-output completion request.
#[derive(Debug, Clone, Copy)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub schema_name: &'a str,
    pub schema: &'a Value,
}

/// Successfully transported reply: the extracted content string plus the
/// completion token count when the envelope reported one.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub content: String,
    pub completion_tokens: Option<f64>,
}

/// Abstract chat-completions backend.
///
/// Implementations handle transport and envelope extraction; content
/// validation stays with the caller. Kept as a trait so trials can run
/// against a scripted mock in tests.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one completion request and extract the reply content.
    ///
    /// Errors carry the transport-level classification; a `200` whose
    /// envelope lacks `choices[0].message.content` is
    /// [`ProviderError::Envelope`].
    async fn complete(&self, request: ChatRequest<'_>) -> Result<ChatReply, ProviderError>;

    /// List the model identifiers the endpoint currently serves.
    ///
    /// Default implementation reports nothing; backends without a listing
    /// endpoint can leave it as is.
    async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }
}
