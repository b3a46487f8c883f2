//! Domain types for articles, optimization results, and Q&A.

pub mod article;
pub mod knowledge;
pub mod optimization;

pub use article::Article;
pub use knowledge::{AnswerResult, AnswerSource, KnowledgeBaseEntry};
pub use optimization::{FaqEntry, OptimizationResult, SummaryFields};
