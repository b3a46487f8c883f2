//! Knowledge base and answer types for retrieval-augmented Q&A.

use serde::{Deserialize, Serialize};

use crate::types::article::Article;

/// A retrieval candidate: an article plus the optimization fields the
/// answerer needs, and the caller-owned inclusion flag.
///
/// Only entries with the flag set and a present embedding are eligible
/// for retrieval. The caller toggles the flag independently of the
/// pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBaseEntry {
    /// The underlying article
    pub article: Article,

    /// Stored summary from a previous optimization run, if any
    pub summary: Option<String>,

    /// Stored embedding from a previous optimization run, if any
    pub embedding: Option<Vec<f32>>,

    /// Caller-owned eligibility flag
    pub include_in_knowledge_base: bool,
}

impl KnowledgeBaseEntry {
    /// Create an entry for an article, eligible by default.
    pub fn new(article: Article) -> Self {
        Self {
            article,
            summary: None,
            embedding: None,
            include_in_knowledge_base: true,
        }
    }

    /// Set the stored summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the stored embedding.
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Set the inclusion flag.
    pub fn with_inclusion(mut self, include: bool) -> Self {
        self.include_in_knowledge_base = include;
        self
    }

    /// Whether this entry can be retrieved at all.
    pub fn is_retrievable(&self) -> bool {
        self.include_in_knowledge_base && self.embedding.is_some()
    }
}

/// One cited source in an answer, with its similarity score rounded
/// to two decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSource {
    pub title: String,
    pub slug: String,
    pub score: f32,
}

/// The result of answering one question. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Compliance-filtered answer text
    pub answer: String,

    /// Ranked sources the answer was grounded in, best first
    pub sources: Vec<AnswerSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_retrievable() {
        let article = Article::new("T", "c", "a", "t");

        let bare = KnowledgeBaseEntry::new(article.clone());
        assert!(!bare.is_retrievable()); // no embedding yet

        let embedded = KnowledgeBaseEntry::new(article.clone()).with_embedding(vec![1.0, 0.0]);
        assert!(embedded.is_retrievable());

        let excluded = KnowledgeBaseEntry::new(article)
            .with_embedding(vec![1.0, 0.0])
            .with_inclusion(false);
        assert!(!excluded.is_retrievable());
    }
}
