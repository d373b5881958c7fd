//! Sentiment Agent - urgency/sentiment tagging of summaries
//!
//! Second regex pass, run over the summarizer's output rather than the raw
//! ticket text. Tier patterns key partly off the emoji tag the summarizer
//! injects, so a category match upstream lands in the matching tier here
//! even when the template wording alone would not.

use regex::Regex;
use tracing::debug;

use crate::types::SentimentReading;

/// One urgency/sentiment tier: a pattern and its fixed output tuple.
struct Tier {
    name: &'static str,
    pattern: Regex,
    sentiment: &'static str,
    urgency: &'static str,
    confidence: &'static str,
    keywords: &'static [&'static str],
}

/// Regex-based sentiment tagger over summaries.
///
/// Five tiers tested in priority order plus a neutral default. Total and
/// deterministic; the confidence percentages are fixed per-tier constants.
pub struct SentimentTagger {
    tiers: Vec<Tier>,
}

/// Output tuple for the default tier (nothing matched).
const DEFAULT_TIER: (&str, &str, &str, &[&str]) =
    ("😐 neutral", "🟡 medium", "75%", &["general inquiry"]);

impl SentimentTagger {
    pub fn new() -> Self {
        // Order is priority order. Patterns match against the lowercased summary.
        let table: [(
            &'static str,
            &'static str,
            &'static str,
            &'static str,
            &'static str,
            &'static [&'static str],
        ); 5] = [
            (
                "critical",
                r"🚨|threaten|legal|lawyer|sue|cancel immediately|switch provider",
                "😡 angry",
                "🔴 critical",
                "98%",
                &["legal threat", "cancellation", "escalation"],
            ),
            (
                "high",
                r"⚠️|broken|not working|refund|money back|failed|error|can't|cannot",
                "😤 frustrated",
                "🟠 high",
                "92%",
                &["service issue", "refund request", "malfunction"],
            ),
            (
                "medium",
                r"📦|delayed|late|tracking|where is|hasn't arrived",
                "😐 concerned",
                "🟡 medium",
                "85%",
                &["delivery delay", "tracking inquiry"],
            ),
            (
                "positive",
                r"✅|thanks|thank|appreciate|great|excellent|wonderful|love|perfect",
                "😊 positive",
                "🟢 low",
                "95%",
                &["satisfaction", "appreciation", "positive feedback"],
            ),
            (
                "question",
                r"❓|how to|help|question|wondering|confused",
                "🤔 neutral",
                "🟡 medium",
                "88%",
                &["inquiry", "help needed", "information request"],
            ),
        ];

        let tiers = table
            .into_iter()
            .map(|(name, pattern, sentiment, urgency, confidence, keywords)| Tier {
                name,
                // Patterns are fixed literals, so compilation cannot fail.
                #[allow(clippy::unwrap_used)]
                pattern: Regex::new(pattern).unwrap(),
                sentiment,
                urgency,
                confidence,
                keywords,
            })
            .collect();

        Self { tiers }
    }

    /// Tag a summary with its urgency/sentiment tuple. Total and deterministic.
    pub fn analyze(&self, summary: &str) -> SentimentReading {
        let lower = summary.to_lowercase();

        for tier in &self.tiers {
            if tier.pattern.is_match(&lower) {
                debug!(tier = tier.name, "Sentiment tier matched");
                return SentimentReading::from_tier(
                    tier.sentiment,
                    tier.urgency,
                    tier.confidence,
                    tier.keywords,
                );
            }
        }

        debug!("No sentiment tier matched, using neutral default");
        let (sentiment, urgency, confidence, keywords) = DEFAULT_TIER;
        SentimentReading::from_tier(sentiment, urgency, confidence, keywords)
    }
}

impl Default for SentimentTagger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_tier_from_emoji_tag() {
        let t = SentimentTagger::new();
        let reading = t.analyze("🚨 CRITICAL: Customer threatening to cancel service and escalate legally. Immediate action required.");
        assert_eq!(reading.sentiment, "😡 angry");
        assert_eq!(reading.urgency, "🔴 critical");
        assert_eq!(reading.confidence, "98%");
        assert_eq!(
            reading.keywords,
            vec!["legal threat", "cancellation", "escalation"]
        );
    }

    #[test]
    fn test_high_tier_from_billing_summary() {
        // The billing template contains "refund", which lands in the high tier.
        let t = SentimentTagger::new();
        let reading = t.analyze(
            "💰 Billing dispute detected. Customer requesting refund due to service/product issues.",
        );
        assert_eq!(reading.sentiment, "😤 frustrated");
        assert_eq!(reading.urgency, "🟠 high");
        assert_eq!(reading.confidence, "92%");
    }

    #[test]
    fn test_medium_tier_from_delivery_tag() {
        let t = SentimentTagger::new();
        let reading =
            t.analyze("📦 Delivery concern. Customer inquiring about delayed or missing shipment.");
        assert_eq!(reading.sentiment, "😐 concerned");
        assert_eq!(reading.urgency, "🟡 medium");
        assert_eq!(reading.confidence, "85%");
    }

    #[test]
    fn test_positive_tier() {
        let t = SentimentTagger::new();
        let reading = t.analyze(
            "✅ Positive feedback received. Customer expressing satisfaction with service/product.",
        );
        assert_eq!(reading.sentiment, "😊 positive");
        assert_eq!(reading.urgency, "🟢 low");
        assert_eq!(reading.confidence, "95%");
    }

    #[test]
    fn test_question_tier() {
        let t = SentimentTagger::new();
        let reading = t.analyze(
            "❓ Customer inquiry. Seeking guidance or information about product/service usage.",
        );
        assert_eq!(reading.sentiment, "🤔 neutral");
        assert_eq!(reading.urgency, "🟡 medium");
        assert_eq!(reading.confidence, "88%");
    }

    #[test]
    fn test_default_tier_when_nothing_matches() {
        let t = SentimentTagger::new();
        let reading = t.analyze("📝 all good here");
        assert_eq!(reading.sentiment, "😐 neutral");
        assert_eq!(reading.urgency, "🟡 medium");
        assert_eq!(reading.confidence, "75%");
        assert_eq!(reading.keywords, vec!["general inquiry"]);
    }

    #[test]
    fn test_priority_order_critical_beats_high() {
        // "legal" (critical) and "error" (high) both present: critical wins.
        let t = SentimentTagger::new();
        let reading = t.analyze("📝 legal error in my invoice");
        assert_eq!(reading.urgency, "🔴 critical");
    }

    #[test]
    fn test_deterministic() {
        let t = SentimentTagger::new();
        let summary = "⚠️ Technical issue reported. Product/service malfunction affecting customer experience.";
        assert_eq!(t.analyze(summary), t.analyze(summary));
    }
}
