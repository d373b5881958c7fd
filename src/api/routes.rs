//! API route definitions
//!
//! Endpoints for the triage dashboard:
//! - /api/v1/health - liveness
//! - /api/v1/status - counters and per-stage breakdown
//! - /api/v1/tickets - ticket list / submission / single-ticket runs
//! - /api/v1/pipeline/run-all - batch pipeline kick-off
//! - /api/v1/agents - pipeline step labels
//! - /api/v1/metrics - illustrative dashboard metrics

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, DashboardState};

/// Create all API routes for the dashboard
pub fn api_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/status", get(handlers::get_status))
        // Tickets
        .route("/tickets", get(handlers::list_tickets))
        .route("/tickets", post(handlers::create_ticket))
        .route("/tickets/:id", get(handlers::get_ticket))
        .route("/tickets/:id/run", post(handlers::run_ticket))
        // Pipeline
        .route("/pipeline/run-all", post(handlers::run_all))
        // Dashboard chrome
        .route("/agents", get(handlers::get_agents))
        .route("/metrics", get(handlers::get_metrics))
        .with_state(state)
}

/// Legacy health endpoint at root level
pub fn legacy_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/health", get(handlers::legacy_health_check))
        .with_state(state)
}
