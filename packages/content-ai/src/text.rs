//! Plain-text extraction from markup-bearing article content.
//!
//! Prompt and embedding inputs are built from plain text, never raw
//! markup. Extraction is pure and deterministic: no network, no state.

use regex::Regex;

/// Character bound applied to extracted plain text, after whitespace
/// collapse. Keeps prompt and embedding inputs within a predictable
/// size regardless of article length.
pub const PLAIN_TEXT_MAX_CHARS: usize = 4000;

/// Convert markup-bearing content to bounded plain text.
///
/// Strips tags, drops stray angle brackets, collapses whitespace runs
/// to single spaces, trims, and truncates to [`PLAIN_TEXT_MAX_CHARS`].
/// The output never contains `<` or `>` and never exceeds the bound.
pub fn extract_plain_text(markup: &str) -> String {
    let tag_pattern = Regex::new(r"<[^>]*>").unwrap();
    let whitespace_pattern = Regex::new(r"\s+").unwrap();

    let text = tag_pattern.replace_all(markup, " ");
    // A lone bracket is not a tag, but it is still markup residue.
    let text = text.replace(['<', '>'], " ");
    let text = whitespace_pattern.replace_all(&text, " ");
    let text = text.trim();

    if text.chars().count() > PLAIN_TEXT_MAX_CHARS {
        let truncated: String = text.chars().take(PLAIN_TEXT_MAX_CHARS).collect();
        truncated.trim_end().to_string()
    } else {
        text.to_string()
    }
}
