//! Pipeline Orchestrator - four-stage run sequencing
//!
//! Drives a ticket through `uploaded -> summarized -> sentiment -> routed`,
//! storing each stage's output before the next stage starts. Derived fields
//! are only ever written, never cleared; a re-run restarts at `summarized`
//! and overwrites them, so identical input text yields identical final
//! fields.
//!
//! Concurrent runs against the same ticket id are serialized through a
//! per-id mutex so stage writes cannot interleave. Runs on distinct ids
//! proceed concurrently with no bound and no backpressure. There is no
//! cancellation, timeout, or retry; every stage function is total.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::agents::{RoutingAgent, SentimentTagger, Summarizer};
use crate::pipeline::{AppState, SharedTicketStore, SystemStatus};
use crate::types::{Ticket, TicketStage};

/// Owns the three agents and sequences pipeline runs over the shared store.
pub struct PipelineOrchestrator {
    store: SharedTicketStore,
    app_state: Arc<RwLock<AppState>>,
    summarizer: Summarizer,
    tagger: SentimentTagger,
    router: RoutingAgent,
    /// Pacing delay before each stage (animation pacing, 0 disables)
    stage_delay: Duration,
    /// Per-ticket run guards; same-id runs queue instead of interleaving
    run_guards: Mutex<HashMap<u64, Arc<tokio::sync::Mutex<()>>>>,
}

impl PipelineOrchestrator {
    pub fn new(
        store: SharedTicketStore,
        app_state: Arc<RwLock<AppState>>,
        stage_delay: Duration,
    ) -> Self {
        info!(stage_delay_ms = stage_delay.as_millis() as u64, "Initializing pipeline orchestrator");
        Self {
            store,
            app_state,
            summarizer: Summarizer::new(),
            tagger: SentimentTagger::new(),
            router: RoutingAgent::new(),
            stage_delay,
            run_guards: Mutex::new(HashMap::new()),
        }
    }

    /// Submit a new ticket. The caller decides whether to kick off a run
    /// (see `run_owned` for the spawn-friendly variant).
    pub async fn submit(&self, text: impl Into<String>) -> Ticket {
        let ticket = self.store.write().await.insert(text);
        self.app_state.write().await.tickets_created += 1;
        info!(ticket_id = ticket.id, "Ticket submitted");
        ticket
    }

    /// Run the full pipeline for one ticket.
    ///
    /// Unknown ids are a silent no-op (debug log only). Re-running a routed
    /// ticket restarts the sequence and overwrites the derived fields.
    pub async fn run(&self, id: u64) {
        let guard = self.run_guard(id);
        let _serialized = guard.lock().await;

        // Snapshot the text up front; the raw text is never mutated.
        let Some(text) = self.store.read().await.get(id).map(|t| t.text) else {
            debug!(ticket_id = id, "Pipeline run requested for unknown ticket, skipping");
            return;
        };

        {
            let mut state = self.app_state.write().await;
            state.runs_started += 1;
            state.status = SystemStatus::Triaging;
        }

        // Stage 2: summarize
        self.advance_stage(id, TicketStage::Summarized).await;
        self.pace().await;
        let summary = self.summarizer.summarize(&text);
        self.store.write().await.update(id, |t| {
            t.summary = Some(summary.clone());
        });

        // Stage 3: sentiment, over the summary rather than the raw text
        self.advance_stage(id, TicketStage::Sentiment).await;
        self.pace().await;
        let reading = self.tagger.analyze(&summary);
        self.store.write().await.update(id, |t| {
            t.sentiment = Some(reading.sentiment.clone());
            t.urgency = Some(reading.urgency.clone());
            t.confidence = Some(reading.confidence.clone());
            t.keywords = Some(reading.keywords.clone());
        });

        // Stage 4: route, from the labels alone
        self.advance_stage(id, TicketStage::Routed).await;
        self.pace().await;
        let action = self
            .router
            .route(Some(&reading.urgency), Some(&reading.sentiment));
        self.store.write().await.update(id, |t| {
            t.action = Some(action.to_string());
        });

        {
            let mut state = self.app_state.write().await;
            state.runs_completed += 1;
            if state.runs_in_flight() == 0 {
                state.status = SystemStatus::Idle;
            }
        }

        info!(
            ticket_id = id,
            urgency = %reading.urgency,
            sentiment = %reading.sentiment,
            action,
            "Pipeline run complete"
        );
    }

    /// `run` with an owned receiver, for `tokio::spawn`.
    pub async fn run_owned(self: Arc<Self>, id: u64) {
        self.run(id).await;
    }

    /// The shared ticket store this orchestrator mutates.
    pub fn store(&self) -> &SharedTicketStore {
        &self.store
    }

    /// The shared counters this orchestrator updates.
    pub fn app_state(&self) -> &Arc<RwLock<AppState>> {
        &self.app_state
    }

    /// Run every ticket that has not been through a complete run yet, one
    /// independent pipeline invocation per ticket. Returns how many ran.
    pub async fn run_all(&self) -> usize {
        let ids = self.store.read().await.untriaged_ids();
        if ids.is_empty() {
            debug!("Run-all requested with no untriaged tickets");
            return 0;
        }
        info!(count = ids.len(), "Running pipeline for all untriaged tickets");
        futures::future::join_all(ids.iter().map(|&id| self.run(id))).await;
        ids.len()
    }

    fn run_guard(&self, id: u64) -> Arc<tokio::sync::Mutex<()>> {
        let mut guards = self
            .run_guards
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(guards.entry(id).or_default())
    }

    async fn advance_stage(&self, id: u64, stage: TicketStage) {
        debug!(ticket_id = id, %stage, "Advancing pipeline stage");
        self.store.write().await.update(id, |t| t.stage = stage);
    }

    async fn pace(&self) {
        if !self.stage_delay.is_zero() {
            tokio::time::sleep(self.stage_delay).await;
        }
    }
}
