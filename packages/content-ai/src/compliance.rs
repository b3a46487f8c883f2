//! Compliance filter for generated text.
//!
//! Every piece of model-generated prose passes through this filter
//! before a consumer sees it. Pass 1 redacts prohibited
//! financial-promise phrasing; pass 2 softens second-person investment
//! directives into neutral third-person description.
//!
//! The filter is idempotent: the redaction marker and the softened
//! replacements match no rule, so re-filtering filtered text is a
//! no-op. Text that matches no rule is returned unchanged.

use regex::RegexBuilder;

use crate::error::{PipelineError, Result};

/// Marker substituted for each matched prohibited span.
pub const REDACTION_MARKER: &str = "[redacted]";

/// The rule set a [`ComplianceFilter`] is built from.
///
/// Injected at construction so it can be tested and varied without
/// global state. Patterns are matched case-insensitively, in
/// declaration order; more specific patterns must precede patterns
/// they overlap with (compound guaranteed-return claims come before
/// bare percentage-yield claims, so a single claim redacts as one
/// span rather than two).
#[derive(Debug, Clone)]
pub struct ComplianceRules {
    /// Patterns whose every match is replaced by [`REDACTION_MARKER`]
    pub redactions: Vec<String>,

    /// (pattern, replacement) pairs applied after redaction
    pub softenings: Vec<(String, String)>,
}

impl Default for ComplianceRules {
    fn default() -> Self {
        Self {
            redactions: vec![
                // Guaranteed-return claims, swallowing a trailing yield clause
                r"guarantee(?:s|d)?\s+(?:annual\s+|monthly\s+)?returns?(?:\s+of\s+\d+(?:\.\d+)?\s*%(?:\s*(?:apy|apr)|\s+(?:annually|per\s+year|monthly))?)?".to_string(),
                r"guaranteed\s+(?:profits?|income|gains?|yields?)".to_string(),
                // Bare percentage-yield claims
                r"\d+(?:\.\d+)?\s*%\s*(?:apy|apr)".to_string(),
                r"\d+(?:\.\d+)?\s*%\s+(?:guaranteed|annual\s+returns?|yearly\s+returns?|monthly\s+returns?)".to_string(),
                // Risk-free profit claims
                r"risk[-\s]free\s+(?:returns?|profits?|investments?|income)".to_string(),
                // Absolute promises
                r"(?:you\s+)?(?:cannot|can'?t|never)\s+lose\s+(?:money|your\s+(?:money|investment))".to_string(),
                r"always\s+profitable".to_string(),
                r"certain\s+to\s+(?:rise|increase|grow|profit)".to_string(),
                r"(?:double|triple)\s+your\s+(?:money|investment)".to_string(),
                // Direct solicitation
                r"(?:buy|invest)\s+now\s+before\s+it'?s\s+too\s+late".to_string(),
                r"don'?t\s+miss\s+(?:out\s+on\s+)?this\s+(?:opportunity|chance)".to_string(),
                r"get\s+rich\s+quick(?:ly)?".to_string(),
                r"act\s+now\s+and\s+invest".to_string(),
            ],
            softenings: vec![
                (
                    r"\byou\s+should\s+(?:buy|purchase|invest\s+in)\b".to_string(),
                    "some investors consider".to_string(),
                ),
                (
                    r"\bwe\s+recommend\s+(?:buying|purchasing|investing\s+in)\b".to_string(),
                    "some investors consider".to_string(),
                ),
                (
                    r"\byou\s+(?:must|need\s+to)\s+(?:buy|invest)\b".to_string(),
                    "some investors choose to invest".to_string(),
                ),
            ],
        }
    }
}

/// Redacts prohibited promotional/financial phrasing from generated text.
#[derive(Debug, Clone)]
pub struct ComplianceFilter {
    redactions: Vec<regex::Regex>,
    softenings: Vec<(regex::Regex, String)>,
}

impl ComplianceFilter {
    /// Compile a filter from the given rules.
    ///
    /// Fails with a config error if any pattern does not compile.
    pub fn new(rules: &ComplianceRules) -> Result<Self> {
        let redactions = rules
            .redactions
            .iter()
            .map(|p| compile(p))
            .collect::<Result<Vec<_>>>()?;

        let softenings = rules
            .softenings
            .iter()
            .map(|(p, replacement)| Ok((compile(p)?, replacement.clone())))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            redactions,
            softenings,
        })
    }

    /// Apply both passes to the given text.
    ///
    /// Each match of each redaction pattern becomes [`REDACTION_MARKER`];
    /// softening substitutions run afterwards. Within one pattern,
    /// matches resolve first-match-wins left to right.
    pub fn filter(&self, text: &str) -> String {
        let mut out = text.to_string();

        for pattern in &self.redactions {
            out = pattern.replace_all(&out, REDACTION_MARKER).into_owned();
        }

        for (pattern, replacement) in &self.softenings {
            out = pattern.replace_all(&out, replacement.as_str()).into_owned();
        }

        out
    }
}

fn compile(pattern: &str) -> Result<regex::Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| PipelineError::Config(format!("invalid compliance pattern {pattern:?}: {e}")))
}
