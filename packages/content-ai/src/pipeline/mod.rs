//! The optimization pipeline: Summary -> FAQ -> Schema -> Embedding.
//!
//! Each stage is independently invocable; [`OptimizationPipeline`] is a
//! convenience composition that runs them in dependency order.

pub mod embedding;
pub mod faq;
pub mod optimize;
pub mod prompts;
pub mod schema;
pub mod summary;

pub use embedding::{build_embedding_input, EmbeddingGenerator};
pub use faq::FaqGenerator;
pub use optimize::{OptimizationPipeline, OptimizationPipelineBuilder};
pub use schema::{SchemaBuilder, SchemaConfig};
pub use summary::SummaryGenerator;

/// Strip a markdown code fence from a model response, if present.
///
/// Models wrap JSON in ```json fences often enough that every parsing
/// stage tolerates it.
pub(crate) fn strip_code_fences(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

#[cfg(test)]
mod tests {
    use super::strip_code_fences;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n[]\n```"), "[]");
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
    }
}
