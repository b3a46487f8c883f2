//! Optimization result types - what the pipeline produces per article.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One question/answer pair generated for an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    /// Create a new FAQ entry.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The four-field structured response of the summary stage.
///
/// `summary` and `excerpt` are prose and pass through the compliance
/// filter before reaching a consumer. `primary_topic` and
/// `key_entities` are short structural labels and are exempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryFields {
    /// 2-4 sentence neutral summary of the article
    pub summary: String,

    /// One-sentence teaser for listings
    pub excerpt: String,

    /// 2-4 word topic label
    pub primary_topic: String,

    /// Key entities in order of prominence
    pub key_entities: Vec<String>,
}

/// Everything the pipeline produces for one article.
///
/// Invariants:
/// - `schema_markup` contains an FAQ block iff `faq` is non-empty.
/// - Every free-text field has passed the compliance filter at least
///   once; `primary_topic` and `key_entities` are exempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Compliance-filtered summary
    pub summary: String,

    /// Compliance-filtered excerpt
    pub excerpt: String,

    /// Topic label (not filtered - structural, not prose)
    pub primary_topic: String,

    /// Key entities (not filtered - structural, not prose)
    pub key_entities: Vec<String>,

    /// Generated FAQ, each field filtered independently
    pub faq: Vec<FaqEntry>,

    /// Serialized JSON-LD document
    pub schema_markup: String,

    /// Embedding vector; dimension is a property of the embedding service
    pub embedding: Vec<f32>,

    /// When the pipeline completed
    pub processed_at: DateTime<Utc>,
}
