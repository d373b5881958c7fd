//! Triage Processing Pipeline
//!
//! ## Four-Stage Pipeline
//!
//! ```text
//! STAGE 1: Upload         (ticket enters the store)
//! STAGE 2: Summarize      (Content Writer Agent, regex categorization)
//! STAGE 3: Sentiment      (Sentiment Agent, second regex pass over summary)
//! STAGE 4: Route          (Customer Support Agent, decision table)
//! ```
//!
//! All ticket mutation goes through [`TicketStore::update`], the single
//! mutation entry point over the shared in-memory list. Concurrent runs on
//! the same ticket id are serialized per-id by the orchestrator; runs on
//! distinct ids proceed concurrently with no bound.

mod orchestrator;
pub mod seed;
mod state;
mod store;

pub use orchestrator::PipelineOrchestrator;
pub use state::{AppState, SystemStatus};
pub use store::{SharedTicketStore, TicketStore};
