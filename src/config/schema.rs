//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files. Every
//! field has a default, so an empty file yields the application's own table.

use serde::{Deserialize, Serialize};

use crate::history::HistoryMode;
use crate::routing::matcher::MatchOptions;
use crate::routing::router::RouteEntry;
use crate::routing::routes::app_routes;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Route table and history mode.
    pub router: RouterConfig,

    /// Host server settings.
    pub server: ServerConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Route table and history settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// History strategy (`web`, `hash` or `memory`).
    pub history: HistoryMode,

    /// Deployment base, e.g. `/app`.
    pub base: String,

    /// Path comparison rules.
    #[serde(flatten)]
    pub match_options: MatchOptions,

    /// Ordered route entries.
    pub routes: Vec<RouteEntry>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryMode::Web,
            base: "/".to_string(),
            match_options: MatchOptions::default(),
            routes: app_routes(),
        }
    }
}

/// Host server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "soundgate_router=info,tower_http=info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
