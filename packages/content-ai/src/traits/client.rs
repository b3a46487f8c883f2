//! Capability traits for the two external AI services.
//!
//! The pipeline treats the language model and the embedding service as
//! black boxes behind these traits. Implementations wrap specific
//! providers (OpenAI, Anthropic, etc.) and handle transport details;
//! the pipeline owns prompting and response parsing.
//!
//! No retries or backoff here: transient failures propagate to the
//! caller unchanged. Per-call deadlines belong in the adapter.

use async_trait::async_trait;

use crate::error::ClientResult;

/// Free-text completion capability of a language model.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Request a completion for the given system and user prompts.
    ///
    /// A successful response that carries no text must surface as
    /// [`ClientError::EmptyResponse`](crate::error::ClientError::EmptyResponse).
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> ClientResult<String>;
}

/// Fixed-dimension vector embedding capability.
///
/// The dimension is a property of the backing service and is constant
/// for a given deployment; the pipeline never assumes a specific value.
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Request an embedding vector for the given text.
    async fn embed(&self, text: &str) -> ClientResult<Vec<f32>>;
}
