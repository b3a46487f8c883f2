//! Grounded question answering over the article knowledge base.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::compliance::ComplianceFilter;
use crate::error::{PipelineError, Result};
use crate::pipeline::prompts::{build_context_block, format_qa_system_prompt, NO_ANSWER_TEXT};
use crate::qa::rank::{rank, DEFAULT_TOP_K};
use crate::traits::{EmbeddingClient, GenerationClient};
use crate::types::{AnswerResult, AnswerSource, KnowledgeBaseEntry};

/// Answers free-text questions strictly from retrieved articles.
pub struct QaAnswerer {
    generation: Arc<dyn GenerationClient>,
    embedding: Arc<dyn EmbeddingClient>,
    filter: ComplianceFilter,
    top_k: usize,
}

impl QaAnswerer {
    /// Create a new answerer with the default top-k.
    pub fn new(
        generation: Arc<dyn GenerationClient>,
        embedding: Arc<dyn EmbeddingClient>,
        filter: ComplianceFilter,
    ) -> Self {
        Self {
            generation,
            embedding,
            filter,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override how many entries ground an answer.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Answer a question over the given knowledge base snapshot.
    ///
    /// Embeds the question, ranks candidates, and grounds the answer in
    /// the selected entries. When nothing is eligible, returns the
    /// fixed "not enough information" answer without a generation call.
    pub async fn answer(
        &self,
        question: &str,
        candidates: &[KnowledgeBaseEntry],
    ) -> Result<AnswerResult> {
        let query_embedding = self
            .embedding
            .embed(question)
            .await
            .map_err(PipelineError::Embedding)?;

        let ranked = rank(&query_embedding, candidates, self.top_k);
        if ranked.is_empty() {
            warn!("no eligible knowledge base entries for question");
            return Ok(AnswerResult {
                answer: NO_ANSWER_TEXT.to_string(),
                sources: Vec::new(),
            });
        }

        debug!(selected = ranked.len(), "answering from ranked context");

        let context = build_context_block(&ranked);
        let system_prompt = format_qa_system_prompt(&context);

        let raw_answer = self
            .generation
            .complete(&system_prompt, question)
            .await
            .map_err(PipelineError::Generation)?;

        let sources = ranked
            .iter()
            .map(|r| AnswerSource {
                title: r.entry.article.title.clone(),
                slug: r.entry.article.slug.clone(),
                score: round_to_two_decimals(r.score),
            })
            .collect();

        Ok(AnswerResult {
            answer: self.filter.filter(&raw_answer),
            sources,
        })
    }
}

fn round_to_two_decimals(score: f32) -> f32 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::ComplianceRules;
    use crate::testing::{MockEmbeddingClient, MockGenerationClient};
    use crate::types::Article;

    fn filter() -> ComplianceFilter {
        ComplianceFilter::new(&ComplianceRules::default()).unwrap()
    }

    fn entry(title: &str, slug: &str, embedding: Vec<f32>) -> KnowledgeBaseEntry {
        KnowledgeBaseEntry::new(Article::new(title, "<p>Body text.</p>", "a", slug))
            .with_summary(format!("Summary of {title}"))
            .with_embedding(embedding)
    }

    #[tokio::test]
    async fn test_no_eligible_entries_skips_generation() {
        let generation = Arc::new(MockGenerationClient::new().with_response("should not be used"));
        let embedding = Arc::new(MockEmbeddingClient::new().with_fixed_embedding(vec![1.0, 0.0]));
        let answerer = QaAnswerer::new(generation.clone(), embedding, filter());

        let excluded = entry("T", "t", vec![1.0, 0.0]).with_inclusion(false);
        let result = answerer.answer("What is a bond?", &[excluded]).await.unwrap();

        assert_eq!(result.answer, NO_ANSWER_TEXT);
        assert!(result.sources.is_empty());
        assert_eq!(generation.call_count(), 0);
    }

    #[tokio::test]
    async fn test_answer_grounds_ranks_and_filters() {
        let generation = Arc::new(
            MockGenerationClient::new()
                .with_response("Bonds pay coupons. We guarantee returns of 20% APY."),
        );
        let embedding = Arc::new(MockEmbeddingClient::new().with_fixed_embedding(vec![0.9, 0.1]));
        let answerer = QaAnswerer::new(generation.clone(), embedding, filter());

        let candidates = vec![
            entry("Bond Basics", "bond-basics", vec![1.0, 0.0]),
            entry("Stock Basics", "stock-basics", vec![0.0, 1.0]),
        ];
        let result = answerer.answer("What is a bond?", &candidates).await.unwrap();

        assert_eq!(result.answer, "Bonds pay coupons. We [redacted].");
        assert_eq!(result.sources.len(), 2);
        assert_eq!(result.sources[0].slug, "bond-basics");
        assert!(result.sources[0].score > result.sources[1].score);

        // Context goes in the system prompt; the user prompt is the raw question.
        let calls = generation.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].system_prompt.contains("=== ARTICLE: Bond Basics ==="));
        assert!(calls[0].system_prompt.contains("Summary of Bond Basics"));
        assert_eq!(calls[0].user_prompt, "What is a bond?");
    }

    #[tokio::test]
    async fn test_scores_rounded_to_two_decimals() {
        let generation = Arc::new(MockGenerationClient::new().with_response("An answer."));
        let embedding = Arc::new(MockEmbeddingClient::new().with_fixed_embedding(vec![0.9, 0.1]));
        let answerer = QaAnswerer::new(generation, embedding, filter());

        let candidates = vec![entry("Bond Basics", "bond-basics", vec![1.0, 0.0])];
        let result = answerer.answer("q", &candidates).await.unwrap();

        let score = result.sources[0].score;
        assert_eq!(score, (score * 100.0).round() / 100.0);
    }

    #[tokio::test]
    async fn test_embedding_failure_propagates() {
        let generation = Arc::new(MockGenerationClient::new());
        let embedding = Arc::new(MockEmbeddingClient::new().failing_with_status(500, "boom"));
        let answerer = QaAnswerer::new(generation, embedding, filter());

        let err = answerer.answer("q", &[]).await.unwrap_err();
        assert!(matches!(err, PipelineError::Embedding(_)));
    }
}
