//! Testing utilities including mock clients.
//!
//! These are useful for testing applications that use the pipeline
//! without making real AI or network calls.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::error::{ClientError, ClientResult};
use crate::traits::{EmbeddingClient, GenerationClient};

/// Record of one completion request made to the mock.
#[derive(Debug, Clone)]
pub struct GenerationCall {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// A mock generation client with scripted responses.
///
/// Responses are consumed in order; when the script runs out the mock
/// fails with an empty-response error, which keeps tests honest about
/// how many completions a flow performs.
#[derive(Default)]
pub struct MockGenerationClient {
    responses: Arc<RwLock<VecDeque<String>>>,
    fail_status: Option<(u16, String)>,
    calls: Arc<RwLock<Vec<GenerationCall>>>,
}

impl MockGenerationClient {
    /// Create a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a scripted response.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.write().unwrap().push_back(response.into());
        self
    }

    /// Make every call fail with the given HTTP status.
    pub fn failing_with_status(mut self, status: u16, body: impl Into<String>) -> Self {
        self.fail_status = Some((status, body.into()));
        self
    }

    /// All completion requests made so far.
    pub fn calls(&self) -> Vec<GenerationCall> {
        self.calls.read().unwrap().clone()
    }

    /// Number of completion requests made so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> ClientResult<String> {
        self.calls.write().unwrap().push(GenerationCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
        });

        if let Some((status, body)) = &self.fail_status {
            return Err(ClientError::HttpStatus {
                status: *status,
                body: body.clone(),
            });
        }

        self.responses
            .write()
            .unwrap()
            .pop_front()
            .ok_or(ClientError::EmptyResponse)
    }
}

/// A mock embedding client with keyed, fixed, or deterministic vectors.
///
/// Lookup order: an exact-text match, then the fixed vector if one is
/// set, then a sha256-derived deterministic vector of the configured
/// dimension.
pub struct MockEmbeddingClient {
    embeddings: Arc<RwLock<HashMap<String, Vec<f32>>>>,
    fixed: Option<Vec<f32>>,
    dimension: usize,
    fail_status: Option<(u16, String)>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl Default for MockEmbeddingClient {
    fn default() -> Self {
        Self {
            embeddings: Arc::new(RwLock::new(HashMap::new())),
            fixed: None,
            dimension: 1536,
            fail_status: None,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl MockEmbeddingClient {
    /// Create a mock with deterministic fallback vectors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback vector dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Return this vector for every request.
    pub fn with_fixed_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.fixed = Some(embedding);
        self
    }

    /// Return this vector for an exact input text.
    pub fn with_embedding(self, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        self.embeddings.write().unwrap().insert(text.into(), embedding);
        self
    }

    /// Make every call fail with the given HTTP status.
    pub fn failing_with_status(mut self, status: u16, body: impl Into<String>) -> Self {
        self.fail_status = Some((status, body.into()));
        self
    }

    /// All texts embedded so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of embedding requests made so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    fn deterministic_embedding(&self, text: &str) -> Vec<f32> {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let hash = hasher.finalize();

        (0..self.dimension)
            .map(|i| {
                let byte = hash[i % 32] as f32;
                // Normalize to [-1, 1]
                (byte / 127.5) - 1.0
            })
            .collect()
    }
}

#[async_trait]
impl EmbeddingClient for MockEmbeddingClient {
    async fn embed(&self, text: &str) -> ClientResult<Vec<f32>> {
        self.calls.write().unwrap().push(text.to_string());

        if let Some((status, body)) = &self.fail_status {
            return Err(ClientError::HttpStatus {
                status: *status,
                body: body.clone(),
            });
        }

        if let Some(embedding) = self.embeddings.read().unwrap().get(text) {
            return Ok(embedding.clone());
        }

        if let Some(fixed) = &self.fixed {
            return Ok(fixed.clone());
        }

        Ok(self.deterministic_embedding(text))
    }
}
