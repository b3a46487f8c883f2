//! AI client implementations.
//!
//! This module provides a reference implementation of the client
//! traits. Users can use it directly or implement their own.

#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "openai")]
pub use openai::OpenAi;
