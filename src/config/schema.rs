//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the movie-vault proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address, body limits).
    pub listener: ListenerConfig,

    /// Upstream metadata service settings.
    pub upstream: UpstreamConfig,

    /// Fixed access codes gating guest mode and account creation.
    pub access: AccessConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_body_size: 1024 * 1024,
        }
    }
}

/// Upstream metadata service configuration.
///
/// The API key is the credential this whole service exists to shield. It is
/// injected into every outbound query server-side and must never appear in
/// a response or a log line.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the metadata API.
    pub base_url: String,

    /// Server-held API key. Empty by default; supply it via the config
    /// file or the TMDB_API_KEY environment variable.
    pub api_key: String,

    /// Locale appended to queries that do not carry their own `language`.
    pub default_language: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: String::new(),
            default_language: "en-US".to_string(),
        }
    }
}

/// Fixed access codes.
///
/// These are shared-secret strings gating client-side features, not
/// per-user credentials. Rotation requires a restart.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Code unlocking guest/demo mode.
    pub guest_code: String,

    /// Code required to create an account.
    pub signup_code: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            guest_code: "DemoVault_73Z!PR".to_string(),
            signup_code: "CurateVault_88Q!XN".to_string(),
        }
    }
}

/// Timeout configuration.
///
/// Only the inbound request is bounded. The outbound metadata call runs
/// with no timeout of its own; an unresponsive upstream stalls the handler
/// until the inbound deadline cuts the whole request off.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
