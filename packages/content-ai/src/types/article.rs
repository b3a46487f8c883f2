//! Article type - the immutable input to the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An article record as owned by the external content store.
///
/// The pipeline never mutates an article; it only reads it to build
/// prompts, schema markup, and embedding input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Identity assigned by the content store
    pub id: Uuid,

    /// Article headline
    pub title: String,

    /// Raw body, usually markup-bearing (HTML)
    pub content: String,

    /// Author display name
    pub author: String,

    /// URL slug for the canonical page
    pub slug: String,

    /// Publication timestamp, absent for drafts
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Create a new article with a fresh identity.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            author: author.into(),
            slug: slug.into(),
            published_at: None,
        }
    }

    /// Set the publication timestamp.
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }
}
