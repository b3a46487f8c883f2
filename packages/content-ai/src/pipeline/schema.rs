//! Schema stage - JSON-LD structured markup for an article.
//!
//! Pure and deterministic given its inputs: no client calls, no clock
//! reads. The FAQ node is emitted iff the FAQ list is non-empty.

use serde_json::{json, Value};

use crate::types::{Article, FaqEntry};

/// Publisher identity and canonical URL base for schema documents.
#[derive(Debug, Clone)]
pub struct SchemaConfig {
    /// Organization name emitted as the publisher
    pub publisher_name: String,

    /// Site base URL, used to build the canonical page reference
    pub base_url: String,
}

impl SchemaConfig {
    /// Create a new schema config.
    pub fn new(publisher_name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            publisher_name: publisher_name.into(),
            base_url: base_url.into(),
        }
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            publisher_name: "Publisher".to_string(),
            base_url: "https://example.com".to_string(),
        }
    }
}

/// Builds JSON-LD documents describing articles and their FAQ.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    config: SchemaConfig,
}

impl SchemaBuilder {
    /// Create a builder with the given config.
    pub fn new(config: SchemaConfig) -> Self {
        Self { config }
    }

    /// Build the serialized JSON-LD document for an article.
    ///
    /// Always contains an `Article` node; contains an `FAQPage` node
    /// iff `faq` is non-empty, with entries mapped 1:1 in order.
    pub fn build_schema(&self, article: &Article, faq: &[FaqEntry]) -> String {
        let canonical_url = format!(
            "{}/articles/{}",
            self.config.base_url.trim_end_matches('/'),
            article.slug
        );

        let mut article_node = json!({
            "@type": "Article",
            "headline": article.title,
            "author": {
                "@type": "Person",
                "name": article.author,
            },
            "publisher": {
                "@type": "Organization",
                "name": self.config.publisher_name,
            },
            "mainEntityOfPage": {
                "@type": "WebPage",
                "@id": canonical_url,
            },
        });

        if let Some(published_at) = article.published_at {
            article_node["datePublished"] = json!(published_at.to_rfc3339());
        }

        let mut graph = vec![article_node];

        if !faq.is_empty() {
            graph.push(json!({
                "@type": "FAQPage",
                "mainEntity": faq
                    .iter()
                    .map(|entry| json!({
                        "@type": "Question",
                        "name": entry.question,
                        "acceptedAnswer": {
                            "@type": "Answer",
                            "text": entry.answer,
                        },
                    }))
                    .collect::<Vec<Value>>(),
            }));
        }

        json!({
            "@context": "https://schema.org",
            "@graph": graph,
        })
        .to_string()
    }
}
