//! Cosine-similarity ranking over knowledge base entries.

use crate::types::KnowledgeBaseEntry;

/// Default number of entries selected for answer grounding.
pub const DEFAULT_TOP_K: usize = 3;

/// A candidate entry with its similarity score.
#[derive(Debug)]
pub struct RankedEntry<'a> {
    pub entry: &'a KnowledgeBaseEntry,
    pub score: f32,
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 for mismatched lengths or a zero-magnitude vector -
/// an explicit policy rather than propagating NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Score eligible candidates against a query embedding and return the
/// top `k`, best first.
///
/// Only entries with the inclusion flag set and a present embedding
/// participate. The sort is stable, so ties keep input order.
pub fn rank<'a>(
    query_embedding: &[f32],
    candidates: &'a [KnowledgeBaseEntry],
    k: usize,
) -> Vec<RankedEntry<'a>> {
    let mut scored: Vec<RankedEntry<'a>> = candidates
        .iter()
        .filter(|entry| entry.is_retrievable())
        .filter_map(|entry| {
            entry.embedding.as_ref().map(|embedding| RankedEntry {
                entry,
                score: cosine_similarity(query_embedding, embedding),
            })
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);
    scored
}
