//! Triage Engine Configuration
//!
//! Per-deployment configuration loaded from TOML, with env-var overrides
//! for the handful of values operators tune most often.
//!
//! ## Loading Order
//!
//! 1. `PARAGON_CONFIG` environment variable (path to TOML file)
//! 2. `triage_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(TriageConfig::load());
//!
//! // Anywhere in the codebase:
//! let delay = config::get().pipeline.stage_delay_ms;
//! ```

mod triage_config;

pub use triage_config::*;

use std::sync::OnceLock;

/// Global triage configuration, initialized once at startup.
static TRIAGE_CONFIG: OnceLock<TriageConfig> = OnceLock::new();

/// Initialize the global triage configuration.
///
/// Must be called exactly once before any calls to `get()`.
pub fn init(config: TriageConfig) {
    if TRIAGE_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once, ignoring");
    }
}

/// Get a reference to the global triage configuration.
///
/// Panics if `init()` has not been called. A missing config is a fatal
/// startup error, not a recoverable condition.
pub fn get() -> &'static TriageConfig {
    TRIAGE_CONFIG
        .get()
        .expect("config::get() called before config::init(); initialize config in main() first")
}

/// Check whether the config has been initialized.
///
/// Useful for tests and optional config paths.
pub fn is_initialized() -> bool {
    TRIAGE_CONFIG.get().is_some()
}
