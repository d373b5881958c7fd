//! Paragon Triage - Customer Support Triage Engine
//!
//! AI-style ticket analysis and routing service for the ParagonAI support
//! dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Serve the dashboard API with the demo tickets loaded
//! cargo run --release
//!
//! # Serve with an empty store on a custom address
//! cargo run --release -- --addr 127.0.0.1:9090 --no-seed
//!
//! # Triage a file of ticket texts (one per line) and print JSON
//! cargo run --release -- --batch tickets.txt
//! ```
//!
//! # Environment Variables
//!
//! - `PARAGON_CONFIG`: Path to a triage_config.toml
//! - `PARAGON_SERVER_ADDR`: Bind address override
//! - `PARAGON_SUMMARIZE_URL` / `PARAGON_SENTIMENT_URL` / `PARAGON_ROUTE_URL`:
//!   display-only agent endpoint labels
//! - `PARAGON_CORS_ORIGINS`: comma-separated allowed CORS origins
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::info;

use paragon_triage::api::{create_app, DashboardState};
use paragon_triage::config::{self, TriageConfig};
use paragon_triage::pipeline::{seed, AppState, PipelineOrchestrator, TicketStore};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "paragon-triage")]
#[command(about = "ParagonAI Customer Support Triage Engine")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Start with an empty ticket store instead of the demo tickets
    #[arg(long)]
    no_seed: bool,

    /// Triage ticket texts from a file (one per line), print JSON, exit
    #[arg(long, value_name = "FILE")]
    batch: Option<String>,

    /// Override the per-stage pacing delay in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,
}

// ============================================================================
// Batch Mode
// ============================================================================

/// Run the pipeline over a file of ticket texts and print the triaged
/// tickets as a JSON array, oldest first. No server is started and no
/// pacing delay is applied.
async fn run_batch(path: &str) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {path}"))?;
    let texts: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if texts.is_empty() {
        info!(path, "Batch file contains no ticket texts");
        println!("[]");
        return Ok(());
    }
    info!(path, count = texts.len(), "Triaging batch of tickets");

    let store = TicketStore::with_texts(texts).into_shared();
    let app_state = Arc::new(RwLock::new(AppState::default()));
    let orchestrator =
        PipelineOrchestrator::new(Arc::clone(&store), app_state, Duration::ZERO);
    orchestrator.run_all().await;

    let mut tickets = store.read().await.list();
    tickets.reverse(); // oldest first, matching input order
    println!("{}", serde_json::to_string_pretty(&tickets)?);
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    // Load triage configuration
    let triage_config = TriageConfig::load();
    info!(
        service = %triage_config.service.name,
        environment = %triage_config.service.environment,
        "Configuration loaded"
    );
    config::init(triage_config);
    let cfg = config::get();

    // Batch mode: triage a file and exit
    if let Some(path) = args.batch {
        return run_batch(&path).await;
    }

    let server_addr = args.addr.unwrap_or_else(|| cfg.server.addr.clone());
    let stage_delay = Duration::from_millis(args.delay_ms.unwrap_or(cfg.pipeline.stage_delay_ms));

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  Paragon Triage - Customer Support Triage Engine");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("");

    // Shared state
    let seed_demo = cfg.pipeline.seed_demo_tickets && !args.no_seed;
    let store = if seed_demo {
        info!(count = seed::DEMO_TICKETS.len(), "Loading demo seed tickets");
        TicketStore::with_texts(seed::DEMO_TICKETS)
    } else {
        TicketStore::new()
    };

    let initial_state = AppState {
        tickets_created: store.len() as u64,
        ..AppState::default()
    };

    let store = store.into_shared();
    let app_state = Arc::new(RwLock::new(initial_state));
    let orchestrator = Arc::new(PipelineOrchestrator::new(
        Arc::clone(&store),
        Arc::clone(&app_state),
        stage_delay,
    ));

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    // HTTP server
    let state = DashboardState::new(store, app_state, orchestrator);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind {server_addr}"))?;
    info!(addr = %server_addr, "Dashboard API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel_token.cancelled().await })
        .await
        .context("HTTP server error")?;

    info!("");
    info!("Paragon Triage shutdown complete");
    Ok(())
}
