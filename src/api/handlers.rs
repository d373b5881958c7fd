//! API route handlers
//!
//! Request handling logic for the dashboard endpoints: ticket listing and
//! submission, pipeline runs, agent step labels, system status, and the
//! illustrative metrics snapshot.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::config;
use crate::pipeline::{AppState, PipelineOrchestrator, SharedTicketStore};

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct DashboardState {
    /// The session's ticket list
    pub store: SharedTicketStore,
    /// Counters read by the status endpoint
    pub app_state: Arc<RwLock<AppState>>,
    /// Pipeline runner shared with background tasks
    pub orchestrator: Arc<PipelineOrchestrator>,
}

impl DashboardState {
    pub fn new(
        store: SharedTicketStore,
        app_state: Arc<RwLock<AppState>>,
        orchestrator: Arc<PipelineOrchestrator>,
    ) -> Self {
        Self {
            store,
            app_state,
            orchestrator,
        }
    }
}

// ============================================================================
// Health & Status
// ============================================================================

/// GET /api/v1/health
pub async fn get_health() -> Response {
    ApiResponse::ok(serde_json::json!({
        "status": "ok",
        "service": config::get().service.name,
    }))
}

/// GET /health (legacy, unwrapped)
pub async fn legacy_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub service: String,
    pub environment: String,
    pub status: String,
    pub uptime_secs: u64,
    pub tickets_total: usize,
    pub tickets_created: u64,
    pub runs_started: u64,
    pub runs_completed: u64,
    pub runs_in_flight: u64,
    /// Ticket count per pipeline stage, keyed by wire name
    pub stage_breakdown: BTreeMap<String, usize>,
}

/// GET /api/v1/status
///
/// System status: uptime, run counters, and a per-stage ticket breakdown.
pub async fn get_status(State(state): State<DashboardState>) -> Response {
    let app_state = state.app_state.read().await;
    let store = state.store.read().await;

    let mut stage_breakdown: BTreeMap<String, usize> = BTreeMap::new();
    for ticket in store.list() {
        *stage_breakdown.entry(ticket.stage.to_string()).or_default() += 1;
    }

    let cfg = config::get();
    ApiResponse::ok(StatusReport {
        service: cfg.service.name.clone(),
        environment: cfg.service.environment.clone(),
        status: app_state.status.to_string(),
        uptime_secs: app_state.uptime_secs(),
        tickets_total: store.len(),
        tickets_created: app_state.tickets_created,
        runs_started: app_state.runs_started,
        runs_completed: app_state.runs_completed,
        runs_in_flight: app_state.runs_in_flight(),
        stage_breakdown,
    })
}

// ============================================================================
// Tickets
// ============================================================================

/// GET /api/v1/tickets
///
/// Full ordered ticket list, newest first.
pub async fn list_tickets(State(state): State<DashboardState>) -> Response {
    let tickets = state.store.read().await.list();
    ApiResponse::ok(tickets)
}

/// GET /api/v1/tickets/:id
pub async fn get_ticket(State(state): State<DashboardState>, Path(id): Path<u64>) -> Response {
    match state.store.read().await.get(id) {
        Some(ticket) => ApiResponse::ok(ticket),
        None => ApiErrorResponse::not_found(format!("ticket {id} not found")),
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitTicketRequest {
    pub text: String,
}

/// POST /api/v1/tickets
///
/// Submit a new ticket. When `pipeline.auto_run_on_upload` is set the
/// pipeline is kicked off in the background; the response returns the
/// freshly uploaded ticket either way.
pub async fn create_ticket(
    State(state): State<DashboardState>,
    Json(req): Json<SubmitTicketRequest>,
) -> Response {
    if req.text.trim().is_empty() {
        return ApiErrorResponse::bad_request("ticket text must not be empty");
    }

    let ticket = state.orchestrator.submit(req.text).await;

    if config::get().pipeline.auto_run_on_upload {
        tokio::spawn(Arc::clone(&state.orchestrator).run_owned(ticket.id));
    }

    ApiResponse::ok(ticket)
}

/// POST /api/v1/tickets/:id/run
///
/// Run the pipeline to completion for one ticket and return the routed
/// record. Unknown ids get a NOT_FOUND envelope.
pub async fn run_ticket(State(state): State<DashboardState>, Path(id): Path<u64>) -> Response {
    if state.store.read().await.get(id).is_none() {
        return ApiErrorResponse::not_found(format!("ticket {id} not found"));
    }

    state.orchestrator.run(id).await;

    match state.store.read().await.get(id) {
        Some(ticket) => ApiResponse::ok(ticket),
        None => ApiErrorResponse::not_found(format!("ticket {id} not found")),
    }
}

#[derive(Debug, Serialize)]
pub struct RunAllReport {
    pub ran: usize,
}

/// POST /api/v1/pipeline/run-all
///
/// Run every ticket that is missing a summary or routing action.
pub async fn run_all(State(state): State<DashboardState>) -> Response {
    let ran = state.orchestrator.run_all().await;
    info!(ran, "Run-all complete");
    ApiResponse::ok(RunAllReport { ran })
}

// ============================================================================
// Agent Steps
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AgentStep {
    pub key: &'static str,
    pub label: &'static str,
    /// Display-only endpoint label; the engine never calls it
    pub endpoint: String,
}

/// GET /api/v1/agents
///
/// The three pipeline steps with their display endpoint labels.
pub async fn get_agents() -> Response {
    let agents = &config::get().agents;
    ApiResponse::ok(vec![
        AgentStep {
            key: "content-writer",
            label: "Content Writer Agent",
            endpoint: agents.summarize_url.clone(),
        },
        AgentStep {
            key: "sentiment",
            label: "Sentiment Agent",
            endpoint: agents.sentiment_url.clone(),
        },
        AgentStep {
            key: "customer-support",
            label: "Customer Support Agent",
            endpoint: agents.route_url.clone(),
        },
    ])
}

// ============================================================================
// Metrics (illustrative)
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub response_time: u64,
    pub success_rate: f64,
    pub total_requests: u64,
    pub active_agents: u32,
    pub latency: LatencyPercentiles,
    pub resources: ResourceUsage,
}

#[derive(Debug, Serialize)]
pub struct LatencyPercentiles {
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
}

#[derive(Debug, Serialize)]
pub struct ResourceUsage {
    pub cpu: u64,
    pub memory: u64,
}

impl MetricsSnapshot {
    /// The fixed illustrative snapshot; nothing is collected.
    pub fn fixed() -> Self {
        Self {
            response_time: 112,
            success_rate: 99.8,
            total_requests: 12_400,
            active_agents: 4,
            latency: LatencyPercentiles {
                p50: 95,
                p95: 150,
                p99: 200,
            },
            resources: ResourceUsage { cpu: 55, memory: 68 },
        }
    }
}

/// GET /api/v1/metrics
///
/// Static illustrative metrics for the dashboard tiles.
pub async fn get_metrics() -> Response {
    ApiResponse::ok(MetricsSnapshot::fixed())
}
