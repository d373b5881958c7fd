//! Customer Support Agent - routing decision table
//!
//! Maps the tagger's urgency/sentiment labels to a queue/escalation
//! instruction. Depends only on substring membership in those labels, never
//! on the original ticket text.

use tracing::debug;

/// Routing instructions, one per bucket, in priority order.
mod instructions {
    pub const ESCALATE: &str =
        "🚨 ESCALATE TO SENIOR AGENT - Priority handling required within 15 minutes";
    pub const PRIORITY: &str = "⚡ PRIORITY QUEUE - Assign to experienced agent within 1 hour";
    pub const STANDARD: &str = "📋 STANDARD QUEUE - Process within 4 hours during business hours";
    pub const FOLLOW_UP: &str =
        "💚 FOLLOW-UP QUEUE - Thank customer and gather testimonial/feedback";
    pub const NORMAL: &str = "📥 NORMAL QUEUE - Standard processing within 24 hours";
}

/// Decision-table router over urgency/sentiment labels.
///
/// Buckets are tested in fixed priority order; missing labels are treated
/// as empty strings. Total and deterministic.
#[derive(Debug, Default)]
pub struct RoutingAgent;

impl RoutingAgent {
    pub fn new() -> Self {
        Self
    }

    /// Pick the routing instruction for a ticket's labels.
    pub fn route(&self, urgency: Option<&str>, sentiment: Option<&str>) -> &'static str {
        let urgency = urgency.unwrap_or_default().to_lowercase();
        let sentiment = sentiment.unwrap_or_default().to_lowercase();

        let instruction = if urgency.contains("critical") || sentiment.contains("angry") {
            instructions::ESCALATE
        } else if urgency.contains("high") || sentiment.contains("frustrated") {
            instructions::PRIORITY
        } else if urgency.contains("medium") {
            instructions::STANDARD
        } else if sentiment.contains("positive") {
            instructions::FOLLOW_UP
        } else {
            instructions::NORMAL
        };

        debug!(%urgency, %sentiment, instruction, "Routing decision");
        instruction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_urgency_escalates() {
        let r = RoutingAgent::new();
        let action = r.route(Some("🔴 critical"), Some("😐 neutral"));
        assert_eq!(
            action,
            "🚨 ESCALATE TO SENIOR AGENT - Priority handling required within 15 minutes"
        );
    }

    #[test]
    fn test_angry_sentiment_escalates() {
        let r = RoutingAgent::new();
        let action = r.route(Some("🟢 low"), Some("😡 angry"));
        assert!(action.starts_with("🚨 ESCALATE"));
    }

    #[test]
    fn test_high_urgency_priority_queue() {
        let r = RoutingAgent::new();
        let action = r.route(Some("🟠 high"), Some("😤 frustrated"));
        assert!(action.starts_with("⚡ PRIORITY QUEUE"));
    }

    #[test]
    fn test_medium_urgency_standard_queue() {
        let r = RoutingAgent::new();
        let action = r.route(Some("🟡 medium"), Some("😐 concerned"));
        assert!(action.starts_with("📋 STANDARD QUEUE"));
    }

    #[test]
    fn test_positive_sentiment_follow_up_queue() {
        let r = RoutingAgent::new();
        let action = r.route(Some("🟢 low"), Some("😊 positive"));
        assert!(action.starts_with("💚 FOLLOW-UP QUEUE"));
    }

    #[test]
    fn test_missing_labels_default_to_normal_queue() {
        let r = RoutingAgent::new();
        let action = r.route(None, None);
        assert_eq!(
            action,
            "📥 NORMAL QUEUE - Standard processing within 24 hours"
        );
    }

    #[test]
    fn test_substring_membership_only() {
        // Any label containing the bucket substring routes the same way.
        let r = RoutingAgent::new();
        assert!(r.route(Some("CRITICAL"), None).starts_with("🚨"));
        assert!(r.route(Some("very high indeed"), None).starts_with("⚡"));
    }

    #[test]
    fn test_priority_order_escalate_beats_priority() {
        // critical urgency with frustrated sentiment still escalates
        let r = RoutingAgent::new();
        assert!(r
            .route(Some("🔴 critical"), Some("😤 frustrated"))
            .starts_with("🚨"));
    }
}
