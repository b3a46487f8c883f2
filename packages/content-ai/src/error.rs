//! Typed errors for the content optimization pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors from the external generation/embedding capabilities.
///
/// Both capabilities fail the same three ways: the transport broke,
/// the service answered with a non-success status, or it answered
/// with nothing usable.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, DNS, timeout)
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Service answered with a non-success HTTP status
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Service answered successfully but returned no completion/embedding
    #[error("empty response from service")]
    EmptyResponse,
}

/// Errors that can occur during optimization or question answering.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Language-model completion failed
    #[error("generation failed: {0}")]
    Generation(#[source] ClientError),

    /// Embedding request failed
    #[error("embedding failed: {0}")]
    Embedding(#[source] ClientError),

    /// Model response could not be parsed into the expected shape
    #[error("failed to parse model response: {reason}")]
    Parse {
        reason: String,
        /// The raw response, kept for caller-side logging
        response: String,
    },

    /// A required capability or credential is absent
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Result type alias for client capabilities.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
