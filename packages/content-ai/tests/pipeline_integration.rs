//! End-to-end pipeline and Q&A tests against mock clients.

use std::sync::Arc;

use content_ai::testing::{MockEmbeddingClient, MockGenerationClient};
use content_ai::{
    Article, ComplianceFilter, ComplianceRules, KnowledgeBaseEntry, OptimizationPipeline,
    PipelineError, QaAnswerer,
};

const SUMMARY_JSON: &str = r#"{
    "summary": "An explainer on how bonds pay coupons. We guarantee returns of 20% APY.",
    "excerpt": "How bond coupons work.",
    "primary_topic": "fixed income",
    "key_entities": ["bonds", "coupons", "yield"]
}"#;

const FAQ_JSON: &str = r#"[
    {"question": "What is a coupon?", "answer": "The periodic interest payment of a bond."},
    {"question": "Do bonds have risk-free returns?", "answer": "No, all bonds carry some risk."}
]"#;

fn article() -> Article {
    Article::new(
        "Bond Basics",
        "<h1>Bonds</h1><p>Bonds pay coupons on a fixed schedule.</p>",
        "A. Writer",
        "bond-basics",
    )
}

fn pipeline(
    generation: Arc<MockGenerationClient>,
    embedding: Arc<MockEmbeddingClient>,
) -> OptimizationPipeline {
    OptimizationPipeline::builder()
        .generation_client(generation)
        .embedding_client(embedding)
        .build()
        .unwrap()
}

#[tokio::test]
async fn optimize_produces_aggregated_filtered_result() {
    let generation = Arc::new(
        MockGenerationClient::new()
            .with_response(SUMMARY_JSON)
            .with_response(FAQ_JSON),
    );
    let embedding = Arc::new(MockEmbeddingClient::new().with_fixed_embedding(vec![1.0, 0.0, 0.0]));

    let result = pipeline(generation.clone(), embedding.clone())
        .optimize(&article())
        .await
        .unwrap();

    // Summary and excerpt are filtered prose
    assert_eq!(
        result.summary,
        "An explainer on how bonds pay coupons. We [redacted]."
    );
    assert_eq!(result.excerpt, "How bond coupons work.");

    // Structural labels pass through unfiltered
    assert_eq!(result.primary_topic, "fixed income");
    assert_eq!(result.key_entities, vec!["bonds", "coupons", "yield"]);

    // FAQ fields are filtered independently
    assert_eq!(result.faq.len(), 2);
    assert_eq!(result.faq[1].question, "Do bonds have [redacted]?");

    // Embedding comes straight from the client
    assert_eq!(result.embedding, vec![1.0, 0.0, 0.0]);

    // Non-empty FAQ means the schema carries an FAQ block
    assert!(result.schema_markup.contains("FAQPage"));
    let doc: serde_json::Value = serde_json::from_str(&result.schema_markup).unwrap();
    assert_eq!(
        doc["@graph"][1]["mainEntity"].as_array().unwrap().len(),
        result.faq.len()
    );

    // Two completions (summary, FAQ) and one embedding call
    assert_eq!(generation.call_count(), 2);
    assert_eq!(embedding.call_count(), 1);
}

#[tokio::test]
async fn optimize_with_empty_faq_omits_schema_faq_block() {
    let generation = Arc::new(
        MockGenerationClient::new()
            .with_response(SUMMARY_JSON)
            .with_response("[]"),
    );
    let embedding = Arc::new(MockEmbeddingClient::new().with_fixed_embedding(vec![1.0, 0.0, 0.0]));

    let result = pipeline(generation, embedding)
        .optimize(&article())
        .await
        .unwrap();

    assert!(result.faq.is_empty());
    assert!(!result.schema_markup.contains("FAQPage"));
}

#[tokio::test]
async fn optimize_aborts_on_summary_parse_error_without_further_calls() {
    let generation = Arc::new(MockGenerationClient::new().with_response("not json at all"));
    let embedding = Arc::new(MockEmbeddingClient::new());

    let err = pipeline(generation.clone(), embedding.clone())
        .optimize(&article())
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Parse { .. }));
    // The FAQ stage never ran, and neither did the embedding stage
    assert_eq!(generation.call_count(), 1);
    assert_eq!(embedding.call_count(), 0);
}

#[tokio::test]
async fn stages_are_independently_invocable() {
    let generation = Arc::new(MockGenerationClient::new().with_response(FAQ_JSON));
    let embedding = Arc::new(MockEmbeddingClient::new().with_fixed_embedding(vec![0.1, 0.2]));
    let pipeline = pipeline(generation, embedding);

    let faq = pipeline.generate_faq(&article()).await.unwrap();
    assert_eq!(faq.len(), 2);

    let schema = pipeline.generate_schema(&article(), &faq);
    assert!(schema.contains("FAQPage"));

    let vector = pipeline
        .generate_embedding(&article(), None, &faq)
        .await
        .unwrap();
    assert_eq!(vector, vec![0.1, 0.2]);
}

#[tokio::test]
async fn qa_ranks_retrieves_and_cites() {
    let generation =
        Arc::new(MockGenerationClient::new().with_response("Coupons are periodic payments."));
    let embedding = Arc::new(MockEmbeddingClient::new().with_fixed_embedding(vec![0.9, 0.1]));
    let filter = ComplianceFilter::new(&ComplianceRules::default()).unwrap();
    let answerer = QaAnswerer::new(generation, embedding, filter);

    let candidates = vec![
        KnowledgeBaseEntry::new(article())
            .with_summary("Bonds and coupons explained.")
            .with_embedding(vec![1.0, 0.0]),
        KnowledgeBaseEntry::new(Article::new(
            "Stock Basics",
            "<p>Stocks represent ownership.</p>",
            "A. Writer",
            "stock-basics",
        ))
        .with_summary("Stocks explained.")
        .with_embedding(vec![0.0, 1.0]),
    ];

    let result = answerer
        .answer("What is a coupon?", &candidates)
        .await
        .unwrap();

    assert_eq!(result.answer, "Coupons are periodic payments.");
    assert_eq!(result.sources.len(), 2);
    assert_eq!(result.sources[0].slug, "bond-basics");
    assert_eq!(result.sources[1].slug, "stock-basics");
}

#[tokio::test]
async fn qa_with_no_eligible_entries_never_calls_generation() {
    let generation = Arc::new(MockGenerationClient::new().with_response("unused"));
    let embedding = Arc::new(MockEmbeddingClient::new().with_fixed_embedding(vec![1.0]));
    let filter = ComplianceFilter::new(&ComplianceRules::default()).unwrap();
    let answerer = QaAnswerer::new(generation.clone(), embedding, filter);

    let result = answerer.answer("Anything?", &[]).await.unwrap();

    assert!(result.sources.is_empty());
    assert!(!result.answer.is_empty());
    assert_eq!(generation.call_count(), 0);
}
