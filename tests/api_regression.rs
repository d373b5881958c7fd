//! API Regression Tests
//!
//! Drives the assembled application router with `tower::ServiceExt::oneshot`
//! and asserts the envelope shape and endpoint behavior the dashboard
//! depends on.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use paragon_triage::api::{create_app, DashboardState};
use paragon_triage::config::{self, TriageConfig};
use paragon_triage::pipeline::{AppState, PipelineOrchestrator, TicketStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower::ServiceExt;

fn ensure_config() {
    if !config::is_initialized() {
        config::init(TriageConfig::default());
    }
}

/// Build the full app with the given seed texts and zero pacing delay.
fn test_app(texts: &[&str]) -> axum::Router {
    ensure_config();
    let store = TicketStore::with_texts(texts.iter().copied()).into_shared();
    let app_state = Arc::new(RwLock::new(AppState::default()));
    let orchestrator = Arc::new(PipelineOrchestrator::new(
        Arc::clone(&store),
        Arc::clone(&app_state),
        Duration::ZERO,
    ));
    create_app(DashboardState::new(store, app_state, orchestrator))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn legacy_health_is_unwrapped() {
    let response = test_app(&[]).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let v = body_json(response).await;
    assert_eq!(v["status"], "ok");
}

#[tokio::test]
async fn v1_health_uses_envelope() {
    let response = test_app(&[]).oneshot(get("/api/v1/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let v = body_json(response).await;
    assert_eq!(v["data"]["status"], "ok");
    assert_eq!(v["meta"]["version"], "1");
}

#[tokio::test]
async fn status_reports_counters_and_breakdown() {
    let response = test_app(&["a", "b"])
        .oneshot(get("/api/v1/status"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let v = body_json(response).await;
    assert_eq!(v["data"]["tickets_total"], 2);
    assert_eq!(v["data"]["runs_completed"], 0);
    assert_eq!(v["data"]["status"], "Idle");
    assert_eq!(v["data"]["stage_breakdown"]["uploaded"], 2);
}

#[tokio::test]
async fn tickets_list_is_newest_first() {
    let response = test_app(&["first", "second"])
        .oneshot(get("/api/v1/tickets"))
        .await
        .unwrap();
    let v = body_json(response).await;
    let tickets = v["data"].as_array().unwrap();
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0]["id"], 2);
    assert_eq!(tickets[0]["text"], "second");
    assert_eq!(tickets[1]["id"], 1);
}

#[tokio::test]
async fn unknown_ticket_gets_not_found_envelope() {
    let response = test_app(&[])
        .oneshot(get("/api/v1/tickets/7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let v = body_json(response).await;
    assert_eq!(v["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn submit_ticket_returns_uploaded_record() {
    let app = test_app(&[]);
    let response = app
        .oneshot(post_json(
            "/api/v1/tickets",
            serde_json::json!({"text": "where is my order?"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let v = body_json(response).await;
    assert_eq!(v["data"]["id"], 1);
    assert_eq!(v["data"]["text"], "where is my order?");
    // The record itself is returned at upload; the pipeline may already be
    // running in the background.
    assert!(v["data"]["stage"].is_string());
}

#[tokio::test]
async fn submit_rejects_blank_text() {
    let response = test_app(&[])
        .oneshot(post_json(
            "/api/v1/tickets",
            serde_json::json!({"text": "   "}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let v = body_json(response).await;
    assert_eq!(v["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn run_endpoint_returns_routed_ticket() {
    let response = test_app(&["I will sue you, cancel my service"])
        .oneshot(post("/api/v1/tickets/1/run"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let v = body_json(response).await;
    assert_eq!(v["data"]["stage"], "routed");
    assert_eq!(v["data"]["urgency"], "🔴 critical");
    assert_eq!(v["data"]["sentiment"], "😡 angry");
    assert!(v["data"]["action"]
        .as_str()
        .unwrap()
        .starts_with("🚨 ESCALATE TO SENIOR AGENT"));
}

#[tokio::test]
async fn run_endpoint_unknown_id_is_404() {
    let response = test_app(&[])
        .oneshot(post("/api/v1/tickets/3/run"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn run_all_reports_count() {
    let response = test_app(&["a", "b", "c"])
        .oneshot(post("/api/v1/pipeline/run-all"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let v = body_json(response).await;
    assert_eq!(v["data"]["ran"], 3);
}

#[tokio::test]
async fn metrics_snapshot_is_the_fixed_payload() {
    let response = test_app(&[]).oneshot(get("/api/v1/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let v = body_json(response).await;
    assert_eq!(v["data"]["responseTime"], 112);
    assert_eq!(v["data"]["successRate"], 99.8);
    assert_eq!(v["data"]["totalRequests"], 12_400);
    assert_eq!(v["data"]["activeAgents"], 4);
    assert_eq!(v["data"]["latency"]["p99"], 200);
    assert_eq!(v["data"]["resources"]["memory"], 68);
}

#[tokio::test]
async fn agents_lists_the_three_pipeline_steps() {
    let response = test_app(&[]).oneshot(get("/api/v1/agents")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let v = body_json(response).await;
    let steps = v["data"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["key"], "content-writer");
    assert_eq!(steps[0]["endpoint"], "/customer-support");
    assert_eq!(steps[1]["key"], "sentiment");
    assert_eq!(steps[2]["key"], "customer-support");
}

#[tokio::test]
async fn unmatched_path_gets_envelope_404() {
    let response = test_app(&[])
        .oneshot(get("/api/v1/does-not-exist"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let v = body_json(response).await;
    assert_eq!(v["error"]["code"], "NOT_FOUND");
}
