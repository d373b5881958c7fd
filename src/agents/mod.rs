//! Triage Agents - the three-stage analysis pipeline
//!
//! Each agent is a total, pure, deterministic function over its input:
//!
//! - **Content Writer Agent** ([`Summarizer`]): regex categorization of raw
//!   ticket text into a templated one-line summary
//! - **Sentiment Agent** ([`SentimentTagger`]): second regex pass over the
//!   summary yielding a sentiment/urgency/confidence/keyword tuple
//! - **Customer Support Agent** ([`RoutingAgent`]): decision table over the
//!   urgency/sentiment labels yielding a queue/escalation instruction
//!
//! No agent has an error case. Category order is load-bearing: the first
//! matching pattern wins at every stage.

mod router;
mod sentiment;
mod summarizer;

pub use router::RoutingAgent;
pub use sentiment::SentimentTagger;
pub use summarizer::Summarizer;
