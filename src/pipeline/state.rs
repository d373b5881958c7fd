//! Application State and System Status
//!
//! Shared counters for the triage pipeline, accessible from API handlers
//! and pipeline runs.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Shared application state read by the status endpoint.
///
/// Wrapped in `Arc<RwLock<>>` for access across the async runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Process uptime (serialized as seconds via `uptime_secs`)
    #[serde(skip, default = "Instant::now")]
    pub uptime: Instant,

    /// Tickets ever created this session
    pub tickets_created: u64,

    /// Pipeline runs started (includes re-runs)
    pub runs_started: u64,

    /// Pipeline runs completed (ticket reached routed)
    pub runs_completed: u64,

    /// Current system status
    pub status: SystemStatus,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            uptime: Instant::now(),
            tickets_created: 0,
            runs_started: 0,
            runs_completed: 0,
            status: SystemStatus::Idle,
        }
    }
}

impl AppState {
    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.uptime.elapsed().as_secs()
    }

    /// Whether any pipeline runs are currently in flight.
    pub fn runs_in_flight(&self) -> u64 {
        self.runs_started.saturating_sub(self.runs_completed)
    }
}

/// System operational status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemStatus {
    /// No pipeline runs in flight
    Idle,
    /// At least one pipeline run in flight
    Triaging,
}

impl std::fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemStatus::Idle => write!(f, "Idle"),
            SystemStatus::Triaging => write!(f, "Triaging"),
        }
    }
}
