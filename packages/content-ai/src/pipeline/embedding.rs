//! Embedding stage - vector representation of an optimized article.

use std::sync::Arc;

use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::text::extract_plain_text;
use crate::traits::EmbeddingClient;
use crate::types::{Article, FaqEntry};

/// Builds the embedding input text and requests the vector.
pub struct EmbeddingGenerator {
    client: Arc<dyn EmbeddingClient>,
}

impl EmbeddingGenerator {
    /// Create a new embedding generator.
    pub fn new(client: Arc<dyn EmbeddingClient>) -> Self {
        Self { client }
    }

    /// Embed an article together with its generated summary and FAQ.
    ///
    /// No filtering is applied here: the embedding is never displayed
    /// to end users.
    pub async fn embed_article(
        &self,
        article: &Article,
        summary: Option<&str>,
        faq: &[FaqEntry],
    ) -> Result<Vec<f32>> {
        debug!(article_id = %article.id, "generating embedding");

        let input = build_embedding_input(article, summary, faq);
        self.client
            .embed(&input)
            .await
            .map_err(PipelineError::Embedding)
    }
}

/// Concatenate, in fixed order: title, summary (if present), bounded
/// plain-text content, and FAQ pairs (if present).
pub fn build_embedding_input(article: &Article, summary: Option<&str>, faq: &[FaqEntry]) -> String {
    let mut parts = vec![article.title.clone()];

    if let Some(summary) = summary {
        parts.push(summary.to_string());
    }

    parts.push(extract_plain_text(&article.content));

    if !faq.is_empty() {
        let faq_text = faq
            .iter()
            .map(|entry| format!("Q: {}\nA: {}", entry.question, entry.answer))
            .collect::<Vec<_>>()
            .join("\n");
        parts.push(faq_text);
    }

    parts.join("\n")
}
