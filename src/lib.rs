//! Paragon Triage: Customer Support Ticket Intelligence
//!
//! Deterministic triage pipeline for customer support tickets.
//!
//! ## Architecture
//!
//! - **Content Writer Agent**: regex categorization into templated summaries
//! - **Sentiment Agent**: urgency/sentiment tagging of summaries
//! - **Customer Support Agent**: decision-table routing to queues
//! - **Pipeline Orchestrator**: four-stage run sequencing over the shared
//!   in-memory ticket store
//! - **Dashboard API**: axum HTTP surface for the triage dashboard

pub mod agents;
pub mod api;
pub mod config;
pub mod pipeline;
pub mod types;

// Re-export configuration
pub use config::TriageConfig;

// Re-export commonly used types
pub use types::{SentimentReading, Ticket, TicketStage};

// Re-export agents
pub use agents::{RoutingAgent, SentimentTagger, Summarizer};

// Re-export pipeline components
pub use pipeline::{AppState, PipelineOrchestrator, SystemStatus, TicketStore};
