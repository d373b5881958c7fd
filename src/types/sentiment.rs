//! Sentiment tagger output record

use serde::{Deserialize, Serialize};

/// Fixed-shape record produced by the sentiment tagger for one summary.
///
/// Confidence is a fixed percentage string per tier, not a computed score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentReading {
    /// Sentiment label, e.g. "😡 angry"
    pub sentiment: String,
    /// Urgency label, e.g. "🔴 critical"
    pub urgency: String,
    /// Fixed confidence percentage, e.g. "98%"
    pub confidence: String,
    /// Small fixed set of keyword labels for the matched tier
    pub keywords: Vec<String>,
}

impl SentimentReading {
    /// Build a reading from a tier's static label table.
    pub(crate) fn from_tier(
        sentiment: &str,
        urgency: &str,
        confidence: &str,
        keywords: &[&str],
    ) -> Self {
        Self {
            sentiment: sentiment.to_string(),
            urgency: urgency.to_string(),
            confidence: confidence.to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}
