//! Retrieval-augmented question answering over optimized articles.

pub mod answer;
pub mod rank;

pub use answer::QaAnswerer;
pub use rank::{cosine_similarity, rank, RankedEntry, DEFAULT_TOP_K};
