//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Fallback base URL used when no deployment host is known.
pub const LOCAL_BASE_URL: &str = "http://localhost:3000";

/// Root configuration for the API service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Deployment metadata surfaced by the index and status endpoints.
    pub deployment: DeploymentConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ServiceConfig {
    /// Apply `VERCEL_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply `VERCEL_*` overrides using an arbitrary variable lookup.
    ///
    /// Empty values are ignored so an exported-but-blank variable keeps the
    /// configured value.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(host) = var("VERCEL_URL") {
            self.deployment.host = Some(host);
        }
        if let Some(env) = var("VERCEL_ENV") {
            self.deployment.environment = env;
        }
        if let Some(region) = var("VERCEL_REGION") {
            self.deployment.region = region;
        }
        self
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 10 }
    }
}

/// Where the service believes it is deployed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Public host name (no scheme), e.g. "my-app.vercel.app".
    pub host: Option<String>,

    /// Deployment environment name ("production", "preview", ...).
    pub environment: String,

    /// Region the deployment runs in.
    pub region: String,

    /// Hosting platform name.
    pub platform: String,

    /// Free-form source repository description.
    pub repository: String,
}

impl DeploymentConfig {
    /// Base URL used to build example links.
    pub fn base_url(&self) -> String {
        match &self.host {
            Some(host) => format!("https://{}", host),
            None => LOCAL_BASE_URL.to_string(),
        }
    }
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            host: None,
            environment: "development".to_string(),
            region: "local".to_string(),
            platform: "Vercel".to_string(),
            repository: "Connected to GitHub".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
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
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
