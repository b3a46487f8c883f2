//! Core trait abstractions.

pub mod client;

pub use client::{EmbeddingClient, GenerationClient};
