//! Content Writer Agent - ticket text categorization
//!
//! Tests an ordered list of regex categories against the normalized,
//! lowercased ticket text and returns the first matching category's fixed
//! templated summary. Falls back to tagged truncation when nothing matches.

use regex::Regex;
use tracing::debug;

/// Truncation threshold for the fallback summary, in characters.
const FALLBACK_MAX_CHARS: usize = 100;
/// Characters kept before the ellipsis when truncating.
const FALLBACK_KEEP_CHARS: usize = 97;

/// One summary category: a pattern and its fixed templated output.
struct Category {
    /// Short name used in stage logs
    name: &'static str,
    pattern: Regex,
    summary: &'static str,
}

/// Regex-based ticket classifier producing templated one-line summaries.
///
/// Categories are tested in declaration order; the first match wins. The
/// emoji tag at the head of each template is load-bearing downstream: the
/// sentiment tagger keys off it.
pub struct Summarizer {
    categories: Vec<Category>,
}

impl Summarizer {
    pub fn new() -> Self {
        // Order is priority order. Patterns match against lowercased text.
        let table: [(&str, &str, &str); 6] = [
            (
                "legal_escalation",
                r"threaten|move to|cancel|lawyer|sue|legal",
                "🚨 CRITICAL: Customer threatening to cancel service and escalate legally. Immediate action required.",
            ),
            (
                "billing_dispute",
                r"refund|money back|charge|billing|payment issue",
                "💰 Billing dispute detected. Customer requesting refund due to service/product issues.",
            ),
            (
                "technical_failure",
                r"broken|not working|doesn't work|failed|error|bug",
                "⚠️ Technical issue reported. Product/service malfunction affecting customer experience.",
            ),
            (
                "delivery_delay",
                r"late|delayed|hasn't arrived|where is|tracking",
                "📦 Delivery concern. Customer inquiring about delayed or missing shipment.",
            ),
            (
                "positive_feedback",
                r"thanks|thank|appreciate|great|excellent|wonderful",
                "✅ Positive feedback received. Customer expressing satisfaction with service/product.",
            ),
            (
                "product_question",
                r"how to|help|question|wondering|confused",
                "❓ Customer inquiry. Seeking guidance or information about product/service usage.",
            ),
        ];

        let categories = table
            .into_iter()
            .map(|(name, pattern, summary)| Category {
                name,
                // Patterns are fixed literals, so compilation cannot fail.
                #[allow(clippy::unwrap_used)]
                pattern: Regex::new(pattern).unwrap(),
                summary,
            })
            .collect();

        Self { categories }
    }

    /// Summarize raw ticket text. Total and deterministic.
    pub fn summarize(&self, text: &str) -> String {
        let normalized = normalize_whitespace(text);
        let lower = normalized.to_lowercase();

        for category in &self.categories {
            if category.pattern.is_match(&lower) {
                debug!(category = category.name, "Summary category matched");
                return category.summary.to_string();
            }
        }

        debug!("No summary category matched, using truncation fallback");
        format!("📝 {}", truncate_chars(&normalized))
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse runs of whitespace to single spaces and trim the ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep the first 97 characters plus an ellipsis when the text exceeds 100
/// characters, else return it verbatim. Character-based so a multi-byte
/// char is never split.
fn truncate_chars(text: &str) -> String {
    if text.chars().count() > FALLBACK_MAX_CHARS {
        let head: String = text.chars().take(FALLBACK_KEEP_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
