//! FAQ stage - generated question/answer pairs for an article.

use std::sync::Arc;

use tracing::debug;

use crate::compliance::ComplianceFilter;
use crate::error::{PipelineError, Result};
use crate::pipeline::prompts::{format_article_prompt, FAQ_SYSTEM_PROMPT};
use crate::pipeline::strip_code_fences;
use crate::text::extract_plain_text;
use crate::traits::GenerationClient;
use crate::types::{Article, FaqEntry};

/// Generates 4-6 FAQ pairs for an article.
pub struct FaqGenerator {
    client: Arc<dyn GenerationClient>,
    filter: ComplianceFilter,
}

impl FaqGenerator {
    /// Create a new FAQ generator.
    pub fn new(client: Arc<dyn GenerationClient>, filter: ComplianceFilter) -> Self {
        Self { client, filter }
    }

    /// Generate FAQ pairs, preserving the model's order.
    ///
    /// Each question and each answer passes the compliance filter
    /// independently.
    pub async fn generate_faq(&self, article: &Article) -> Result<Vec<FaqEntry>> {
        debug!(article_id = %article.id, "generating FAQ");

        let plain_text = extract_plain_text(&article.content);
        let user_prompt = format_article_prompt(&article.title, &plain_text);

        let response = self
            .client
            .complete(FAQ_SYSTEM_PROMPT, &user_prompt)
            .await
            .map_err(PipelineError::Generation)?;

        let entries: Vec<FaqEntry> = serde_json::from_str(strip_code_fences(&response))
            .map_err(|e| PipelineError::Parse {
                reason: format!("FAQ response is not an array of question/answer objects: {e}"),
                response: response.clone(),
            })?;

        Ok(entries
            .into_iter()
            .map(|entry| FaqEntry {
                question: self.filter.filter(&entry.question),
                answer: self.filter.filter(&entry.answer),
            })
            .collect())
    }
}
