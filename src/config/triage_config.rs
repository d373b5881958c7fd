//! Triage Configuration - deployment-tunable values as TOML
//!
//! Every section implements `Default` with values matching the original
//! hardcoded behavior, so the engine runs identically when no config file
//! is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a triage engine deployment.
///
/// Load with `TriageConfig::load()` which searches:
/// 1. `$PARAGON_CONFIG` env var
/// 2. `./triage_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Service identification
    #[serde(default)]
    pub service: ServiceInfo,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Pipeline pacing and startup behavior
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Display-only agent endpoint labels
    #[serde(default)]
    pub agents: AgentEndpoints,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            service: ServiceInfo::default(),
            server: ServerConfig::default(),
            pipeline: PipelineConfig::default(),
            agents: AgentEndpoints::default(),
        }
    }
}

impl TriageConfig {
    /// Load configuration using the standard search order:
    /// 1. `$PARAGON_CONFIG` environment variable
    /// 2. `./triage_config.toml` in the current working directory
    /// 3. Built-in defaults
    ///
    /// Env-var overrides (`PARAGON_SERVER_ADDR`, `PARAGON_SUMMARIZE_URL`,
    /// `PARAGON_SENTIMENT_URL`, `PARAGON_ROUTE_URL`) are applied on top of
    /// whichever source was used.
    pub fn load() -> Self {
        let mut config = Self::load_base();
        config.apply_env_overrides();
        config
    }

    fn load_base() -> Self {
        if let Ok(path) = std::env::var("PARAGON_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded triage config from PARAGON_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from PARAGON_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "PARAGON_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("triage_config.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded triage config from ./triage_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./triage_config.toml, using defaults");
                }
            }
        }

        info!("No triage_config.toml found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply env-var overrides on top of the loaded values.
    fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var("PARAGON_SERVER_ADDR") {
            self.server.addr = addr;
        }
        if let Ok(url) = std::env::var("PARAGON_SUMMARIZE_URL") {
            self.agents.summarize_url = url;
        }
        if let Ok(url) = std::env::var("PARAGON_SENTIMENT_URL") {
            self.agents.sentiment_url = url;
        }
        if let Ok(url) = std::env::var("PARAGON_ROUTE_URL") {
            self.agents.route_url = url;
        }
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.addr.trim().is_empty() {
            return Err(ConfigError::Invalid("server.addr must not be empty".into()));
        }
        if self.pipeline.stage_delay_ms > 60_000 {
            return Err(ConfigError::Invalid(format!(
                "pipeline.stage_delay_ms is {} ms, maximum is 60000",
                self.pipeline.stage_delay_ms
            )));
        }
        Ok(())
    }
}

/// Errors from loading or validating a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config file {0}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// Sections
// ============================================================================

/// Service identification, surfaced in logs and the status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    #[serde(default = "defaults::service_name")]
    pub name: String,
    #[serde(default = "defaults::environment")]
    pub environment: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            name: defaults::service_name(),
            environment: defaults::environment(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, overridable via `PARAGON_SERVER_ADDR` or `--addr`
    #[serde(default = "defaults::server_addr")]
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: defaults::server_addr(),
        }
    }
}

/// Pipeline pacing and startup behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Delay before each pipeline stage, in milliseconds. Animation pacing
    /// for dashboards polling the API, not real work; set 0 to disable.
    #[serde(default = "defaults::stage_delay_ms")]
    pub stage_delay_ms: u64,

    /// Run the pipeline automatically when a ticket is submitted
    #[serde(default = "defaults::auto_run_on_upload")]
    pub auto_run_on_upload: bool,

    /// Load the demo seed tickets at startup
    #[serde(default = "defaults::seed_demo_tickets")]
    pub seed_demo_tickets: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stage_delay_ms: defaults::stage_delay_ms(),
            auto_run_on_upload: defaults::auto_run_on_upload(),
            seed_demo_tickets: defaults::seed_demo_tickets(),
        }
    }
}

/// Display-only endpoint labels shown next to each pipeline step.
///
/// These are UI text for the dashboard; no requests are ever made to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentEndpoints {
    #[serde(default = "defaults::summarize_url")]
    pub summarize_url: String,
    #[serde(default = "defaults::sentiment_url")]
    pub sentiment_url: String,
    #[serde(default = "defaults::route_url")]
    pub route_url: String,
}

impl Default for AgentEndpoints {
    fn default() -> Self {
        Self {
            summarize_url: defaults::summarize_url(),
            sentiment_url: defaults::sentiment_url(),
            route_url: defaults::route_url(),
        }
    }
}

/// Default values, one function per `#[serde(default = ...)]` site.
mod defaults {
    pub fn service_name() -> String {
        "paragon-triage".to_string()
    }
    pub fn environment() -> String {
        "development".to_string()
    }
    pub fn server_addr() -> String {
        "0.0.0.0:8080".to_string()
    }
    pub fn stage_delay_ms() -> u64 {
        150
    }
    pub fn auto_run_on_upload() -> bool {
        true
    }
    pub fn seed_demo_tickets() -> bool {
        true
    }
    pub fn summarize_url() -> String {
        "/customer-support".to_string()
    }
    pub fn sentiment_url() -> String {
        "/sentiment".to_string()
    }
    pub fn route_url() -> String {
        "/content-writer".to_string()
    }
}
