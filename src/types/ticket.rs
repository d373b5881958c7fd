//! Ticket types: Ticket, TicketStage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Pipeline Stage
// ============================================================================

/// Position of a ticket in the fixed four-step triage pipeline.
///
/// Stages only advance forward within a single pipeline run:
/// `uploaded -> summarized -> sentiment -> routed`. Re-running a routed
/// ticket restarts the sequence at `summarized`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketStage {
    /// Raw text received, no processing yet
    #[default]
    Uploaded,
    /// Summarizer has run (or is running)
    Summarized,
    /// Sentiment tagger has run (or is running)
    Sentiment,
    /// Routing decision made - terminal stage
    Routed,
}

impl std::fmt::Display for TicketStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketStage::Uploaded => write!(f, "uploaded"),
            TicketStage::Summarized => write!(f, "summarized"),
            TicketStage::Sentiment => write!(f, "sentiment"),
            TicketStage::Routed => write!(f, "routed"),
        }
    }
}

// ============================================================================
// Ticket
// ============================================================================

/// A single customer-submitted text record tracked through the triage stages.
///
/// The raw `text` is never mutated by the pipeline. Derived fields are
/// populated stage by stage and never cleared once set within one run; a
/// re-run overwrites them in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique id, allocated as max(existing) + 1
    pub id: u64,
    /// Raw submitted ticket text
    pub text: String,
    /// Current pipeline stage
    pub stage: TicketStage,
    /// Submission timestamp
    pub created_at: DateTime<Utc>,
    /// Templated one-line categorization from the summarizer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Sentiment label from the tagger (e.g. "😡 angry")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    /// Urgency label from the tagger (e.g. "🔴 critical")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    /// Fixed per-tier confidence percentage string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    /// Keyword labels detected by the tagger
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Final templated queue/escalation instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Ticket {
    /// Create a freshly uploaded ticket with no derived fields.
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            stage: TicketStage::Uploaded,
            created_at: Utc::now(),
            summary: None,
            sentiment: None,
            urgency: None,
            confidence: None,
            keywords: None,
            action: None,
        }
    }

    /// Whether the ticket has been through a complete pipeline run.
    ///
    /// Run-all skips triaged tickets; a ticket missing either its summary
    /// or its routing action is picked up again.
    pub fn is_triaged(&self) -> bool {
        self.summary.is_some() && self.action.is_some()
    }
}
