//! LLM prompts for the optimization and answering stages.
//!
//! Every generation prompt asserts a neutral, non-promotional register;
//! the compliance filter is the backstop, not the only line of defense.

use crate::qa::rank::RankedEntry;
use crate::text::extract_plain_text;

/// System prompt for the summary stage.
pub const SUMMARY_SYSTEM_PROMPT: &str = r#"You are an editorial assistant for a publishing platform. You write neutral, descriptive, non-promotional copy. Never promise outcomes, returns, or performance.

Output JSON with exactly this structure and no other fields:
{
    "summary": "2-4 sentence neutral summary of the article",
    "excerpt": "one-sentence teaser suitable for a listing page",
    "primary_topic": "2-4 word topic label",
    "key_entities": ["key people, organizations, and concepts, most prominent first"]
}"#;

/// User prompt template for the summary stage.
pub const SUMMARY_USER_PROMPT: &str = r#"Title: {title}

Article text:
{content}"#;

/// System prompt for the FAQ stage.
pub const FAQ_SYSTEM_PROMPT: &str = r#"You are an editorial assistant for a publishing platform. You write neutral, descriptive, non-promotional copy. Never promise outcomes, returns, or performance.

Generate 4-6 frequently asked questions a reader might have about the article, with concise factual answers drawn only from the article itself.

Output a JSON array with exactly this structure and no other fields:
[
    {"question": "...", "answer": "..."}
]"#;

/// User prompt template for the FAQ stage (same shape as the summary stage).
pub const FAQ_USER_PROMPT: &str = SUMMARY_USER_PROMPT;

/// System prompt template for question answering.
///
/// The four constraints, in order: context-only answers, an explicit
/// fallback when the context is insufficient, no financial promises,
/// and a length bound.
pub const QA_SYSTEM_PROMPT: &str = r#"You answer reader questions about published articles.

Rules:
1. Answer STRICTLY from the context below. Do not use outside knowledge.
2. If the context does not contain the answer, reply exactly: "That information is not available in the published articles."
3. Never make financial promises or performance claims of any kind.
4. Keep the answer under 150 words.

Context:
{context}"#;

/// Fixed answer returned when no knowledge base entry is eligible.
pub const NO_ANSWER_TEXT: &str =
    "There is not enough information in the knowledge base to answer that question.";

/// Character bound for the plain-text slice of each context entry.
pub const QA_CONTEXT_SLICE_CHARS: usize = 1500;

/// Format the summary/FAQ user prompt with article fields.
pub fn format_article_prompt(title: &str, plain_text: &str) -> String {
    SUMMARY_USER_PROMPT
        .replace("{title}", title)
        .replace("{content}", plain_text)
}

/// Build the grounded context block from ranked entries.
///
/// Per entry: title, stored summary (when present), and a bounded slice
/// of extracted plain text, separated by explicit section delimiters.
pub fn build_context_block(ranked: &[RankedEntry<'_>]) -> String {
    ranked
        .iter()
        .map(|r| {
            let article = &r.entry.article;
            let mut section = format!("=== ARTICLE: {} ===", article.title);

            if let Some(summary) = &r.entry.summary {
                section.push_str(&format!("\nSummary: {}", summary));
            }

            let text = extract_plain_text(&article.content);
            let slice: String = text.chars().take(QA_CONTEXT_SLICE_CHARS).collect();
            section.push_str(&format!("\nContent: {}", slice));
            section
        })
        .collect::<Vec<_>>()
        .join("\n---\n")
}

/// Format the QA system prompt with the context block.
pub fn format_qa_system_prompt(context: &str) -> String {
    QA_SYSTEM_PROMPT.replace("{context}", context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Article, KnowledgeBaseEntry};

    #[test]
    fn test_format_article_prompt() {
        let formatted = format_article_prompt("Bond Basics", "Bonds pay coupons.");
        assert!(formatted.contains("Title: Bond Basics"));
        assert!(formatted.contains("Bonds pay coupons."));
        assert!(!formatted.contains("{title}"));
        assert!(!formatted.contains("{content}"));
    }

    #[test]
    fn test_context_block_includes_summary_and_delimiters() {
        let article = Article::new("Bond Basics", "<p>Bonds pay coupons.</p>", "A. Writer", "bond-basics");
        let entry = KnowledgeBaseEntry::new(article)
            .with_summary("An intro to bonds.")
            .with_embedding(vec![1.0]);
        let ranked = vec![RankedEntry {
            entry: &entry,
            score: 0.9,
        }];

        let block = build_context_block(&ranked);
        assert!(block.contains("=== ARTICLE: Bond Basics ==="));
        assert!(block.contains("Summary: An intro to bonds."));
        assert!(block.contains("Content: Bonds pay coupons."));
    }

    #[test]
    fn test_qa_prompt_embeds_context() {
        let formatted = format_qa_system_prompt("CONTEXT GOES HERE");
        assert!(formatted.contains("CONTEXT GOES HERE"));
        assert!(!formatted.contains("{context}"));
    }
}
