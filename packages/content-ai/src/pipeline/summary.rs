//! Summary stage - the four-field structured summary of an article.

use std::sync::Arc;

use tracing::debug;

use crate::compliance::ComplianceFilter;
use crate::error::{PipelineError, Result};
use crate::pipeline::prompts::{format_article_prompt, SUMMARY_SYSTEM_PROMPT};
use crate::pipeline::strip_code_fences;
use crate::text::extract_plain_text;
use crate::traits::GenerationClient;
use crate::types::{Article, SummaryFields};

/// Generates the summary/excerpt/topic/entities bundle for an article.
pub struct SummaryGenerator {
    client: Arc<dyn GenerationClient>,
    filter: ComplianceFilter,
}

impl SummaryGenerator {
    /// Create a new summary generator.
    pub fn new(client: Arc<dyn GenerationClient>, filter: ComplianceFilter) -> Self {
        Self { client, filter }
    }

    /// Generate the four summary fields for an article.
    ///
    /// The compliance filter is applied to `summary` and `excerpt` only;
    /// `primary_topic` and `key_entities` are structural labels, not
    /// prose that could carry promotional claims.
    pub async fn summarize(&self, article: &Article) -> Result<SummaryFields> {
        debug!(article_id = %article.id, "generating summary");

        let plain_text = extract_plain_text(&article.content);
        let user_prompt = format_article_prompt(&article.title, &plain_text);

        let response = self
            .client
            .complete(SUMMARY_SYSTEM_PROMPT, &user_prompt)
            .await
            .map_err(PipelineError::Generation)?;

        let mut fields: SummaryFields = serde_json::from_str(strip_code_fences(&response))
            .map_err(|e| PipelineError::Parse {
                reason: format!("summary response is not a four-field object: {e}"),
                response: response.clone(),
            })?;

        fields.summary = self.filter.filter(&fields.summary);
        fields.excerpt = self.filter.filter(&fields.excerpt);

        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::ComplianceRules;
    use crate::testing::MockGenerationClient;

    fn filter() -> ComplianceFilter {
        ComplianceFilter::new(&ComplianceRules::default()).unwrap()
    }

    fn article() -> Article {
        Article::new(
            "Bond Basics",
            "<p>Bonds pay coupons on a schedule.</p>",
            "A. Writer",
            "bond-basics",
        )
    }

    #[tokio::test]
    async fn test_parses_four_fields_and_filters_prose() {
        let client = Arc::new(MockGenerationClient::new().with_response(
            r#"{"summary": "Bonds explained. We guarantee returns of 20% APY.", "excerpt": "A bond primer.", "primary_topic": "fixed income", "key_entities": ["bonds", "coupons"]}"#,
        ));
        let generator = SummaryGenerator::new(client, filter());

        let fields = generator.summarize(&article()).await.unwrap();
        assert_eq!(fields.summary, "Bonds explained. We [redacted].");
        assert_eq!(fields.excerpt, "A bond primer.");
        assert_eq!(fields.primary_topic, "fixed income");
        assert_eq!(fields.key_entities, vec!["bonds", "coupons"]);
    }

    #[tokio::test]
    async fn test_tolerates_code_fences() {
        let client = Arc::new(MockGenerationClient::new().with_response(
            "```json\n{\"summary\": \"S.\", \"excerpt\": \"E.\", \"primary_topic\": \"topic here\", \"key_entities\": []}\n```",
        ));
        let generator = SummaryGenerator::new(client, filter());

        let fields = generator.summarize(&article()).await.unwrap();
        assert_eq!(fields.summary, "S.");
    }

    #[tokio::test]
    async fn test_wrong_shape_is_parse_error() {
        let client = Arc::new(
            MockGenerationClient::new()
                .with_response(r#"{"summary": "S.", "unexpected": true}"#),
        );
        let generator = SummaryGenerator::new(client, filter());

        let err = generator.summarize(&article()).await.unwrap_err();
        assert!(matches!(err, PipelineError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_client_failure_propagates_as_generation() {
        let client = Arc::new(MockGenerationClient::new().failing_with_status(503, "down"));
        let generator = SummaryGenerator::new(client, filter());

        let err = generator.summarize(&article()).await.unwrap_err();
        assert!(matches!(err, PipelineError::Generation(_)));
    }
}
