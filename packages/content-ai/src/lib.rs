//! AI Content Optimization & Retrieval-Augmented Q&A
//!
//! Turns a raw article into machine-consumable artifacts (summary, FAQ,
//! JSON-LD schema markup, vector embedding) and answers free-text
//! questions grounded in a curated article knowledge base.
//!
//! # Design Philosophy
//!
//! - The pipeline receives an article and two client capabilities; the
//!   caller owns persistence, transport, and authentication.
//! - Every piece of generated prose passes the compliance filter before
//!   a consumer sees it.
//! - Answers are grounded: retrieval first, then a context-restricted
//!   completion - never free-floating model knowledge.
//! - No retries and no rollback: a failed pipeline still paid for every
//!   stage it ran.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use content_ai::{OptimizationPipeline, QaAnswerer};
//! use content_ai::testing::{MockEmbeddingClient, MockGenerationClient};
//!
//! let generation = Arc::new(MockGenerationClient::new());
//! let embedding = Arc::new(MockEmbeddingClient::new());
//!
//! let pipeline = OptimizationPipeline::builder()
//!     .generation_client(generation.clone())
//!     .embedding_client(embedding.clone())
//!     .build()?;
//!
//! let result = pipeline.optimize(&article).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Client capability abstractions
//! - [`types`] - Domain types (articles, results, knowledge base)
//! - [`pipeline`] - Optimization stages and their composition
//! - [`qa`] - Similarity ranking and grounded answering
//! - [`compliance`] - Prohibited-phrase redaction and softening
//! - [`text`] - Plain-text extraction from markup
//! - [`testing`] - Mock clients for tests
//! - [`ai`] - Reference OpenAI adapter (feature `openai`)

pub mod ai;
pub mod compliance;
pub mod error;
pub mod pipeline;
pub mod qa;
pub mod testing;
pub mod text;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use compliance::{ComplianceFilter, ComplianceRules, REDACTION_MARKER};
pub use error::{ClientError, ClientResult, PipelineError, Result};
pub use text::{extract_plain_text, PLAIN_TEXT_MAX_CHARS};
pub use traits::{EmbeddingClient, GenerationClient};
pub use types::{
    AnswerResult, AnswerSource, Article, FaqEntry, KnowledgeBaseEntry, OptimizationResult,
    SummaryFields,
};

// Re-export pipeline components
pub use pipeline::{
    build_embedding_input, EmbeddingGenerator, FaqGenerator, OptimizationPipeline,
    OptimizationPipelineBuilder, SchemaBuilder, SchemaConfig, SummaryGenerator,
};

// Re-export Q&A components
pub use qa::{cosine_similarity, rank, QaAnswerer, RankedEntry, DEFAULT_TOP_K};

#[cfg(feature = "openai")]
pub use ai::OpenAi;
