//! The combined pipeline: Summary -> FAQ -> Schema -> Embedding.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::compliance::{ComplianceFilter, ComplianceRules};
use crate::error::{PipelineError, Result};
use crate::pipeline::embedding::EmbeddingGenerator;
use crate::pipeline::faq::FaqGenerator;
use crate::pipeline::schema::{SchemaBuilder, SchemaConfig};
use crate::pipeline::summary::SummaryGenerator;
use crate::traits::{EmbeddingClient, GenerationClient};
use crate::types::{Article, FaqEntry, OptimizationResult, SummaryFields};

/// Orchestrates the optimization stages in dependency order.
///
/// Each stage is a discrete operation a caller may run on its own;
/// [`optimize`](Self::optimize) is a convenience composition, not a
/// separate mechanism. A failure in any stage aborts the whole call
/// with that stage's error unchanged - no partial result is returned,
/// and external cost already incurred is not compensated.
pub struct OptimizationPipeline {
    summaries: SummaryGenerator,
    faqs: FaqGenerator,
    embeddings: EmbeddingGenerator,
    schema: SchemaBuilder,
}

impl OptimizationPipeline {
    /// Start building a pipeline.
    pub fn builder() -> OptimizationPipelineBuilder {
        OptimizationPipelineBuilder::default()
    }

    /// Summary stage: the four-field structured summary.
    pub async fn generate_summary(&self, article: &Article) -> Result<SummaryFields> {
        self.summaries.summarize(article).await
    }

    /// FAQ stage: 4-6 question/answer pairs.
    pub async fn generate_faq(&self, article: &Article) -> Result<Vec<FaqEntry>> {
        self.faqs.generate_faq(article).await
    }

    /// Schema stage: JSON-LD markup. Pure; needs the FAQ stage's output.
    pub fn generate_schema(&self, article: &Article, faq: &[FaqEntry]) -> String {
        self.schema.build_schema(article, faq)
    }

    /// Embedding stage: needs the summary and FAQ stages' output.
    pub async fn generate_embedding(
        &self,
        article: &Article,
        summary: Option<&str>,
        faq: &[FaqEntry],
    ) -> Result<Vec<f32>> {
        self.embeddings.embed_article(article, summary, faq).await
    }

    /// Run all stages in dependency order and aggregate the result.
    ///
    /// Stage N+1 never starts before stage N's external call returns;
    /// the data dependencies (schema needs FAQ, embedding needs summary
    /// and FAQ) are the contract, not wall-clock ordering.
    pub async fn optimize(&self, article: &Article) -> Result<OptimizationResult> {
        let fields = self.generate_summary(article).await?;
        let faq = self.generate_faq(article).await?;
        let schema_markup = self.generate_schema(article, &faq);
        let embedding = self
            .generate_embedding(article, Some(&fields.summary), &faq)
            .await?;

        info!(article_id = %article.id, faq_entries = faq.len(), "optimization complete");

        Ok(OptimizationResult {
            summary: fields.summary,
            excerpt: fields.excerpt,
            primary_topic: fields.primary_topic,
            key_entities: fields.key_entities,
            faq,
            schema_markup,
            embedding,
            processed_at: Utc::now(),
        })
    }
}

/// Builder for [`OptimizationPipeline`].
///
/// Both clients are required; the compliance rules and schema config
/// fall back to their defaults.
#[derive(Default)]
pub struct OptimizationPipelineBuilder {
    generation: Option<Arc<dyn GenerationClient>>,
    embedding: Option<Arc<dyn EmbeddingClient>>,
    rules: Option<ComplianceRules>,
    schema_config: Option<SchemaConfig>,
}

impl OptimizationPipelineBuilder {
    /// Set the generation client.
    pub fn generation_client(mut self, client: Arc<dyn GenerationClient>) -> Self {
        self.generation = Some(client);
        self
    }

    /// Set the embedding client.
    pub fn embedding_client(mut self, client: Arc<dyn EmbeddingClient>) -> Self {
        self.embedding = Some(client);
        self
    }

    /// Override the default compliance rules.
    pub fn compliance_rules(mut self, rules: ComplianceRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Override the default schema config.
    pub fn schema_config(mut self, config: SchemaConfig) -> Self {
        self.schema_config = Some(config);
        self
    }

    /// Build the pipeline.
    ///
    /// Fails with a config error when a client is missing or a
    /// compliance pattern does not compile.
    pub fn build(self) -> Result<OptimizationPipeline> {
        let generation = self
            .generation
            .ok_or_else(|| PipelineError::Config("generation client is not configured".into()))?;
        let embedding = self
            .embedding
            .ok_or_else(|| PipelineError::Config("embedding client is not configured".into()))?;

        let rules = self.rules.unwrap_or_default();
        let filter = ComplianceFilter::new(&rules)?;
        let schema = SchemaBuilder::new(self.schema_config.unwrap_or_default());

        Ok(OptimizationPipeline {
            summaries: SummaryGenerator::new(generation.clone(), filter.clone()),
            faqs: FaqGenerator::new(generation, filter),
            embeddings: EmbeddingGenerator::new(embedding),
            schema,
        })
    }
}
