//! Health/status endpoint: `/api/status`.

use std::time::Duration;

use axum::{extract::State, http::Method, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::{iso_timestamp, EndpointSummary, RUNTIME_VERSION, SERVICE_NAME};
use crate::config::DeploymentConfig;
use crate::http::request::ensure_get;
use crate::http::response::ApiError;
use crate::http::server::AppState;

const ENDPOINTS: [EndpointSummary; 4] = [
    EndpointSummary {
        path: "/api/hello",
        method: "GET",
        description: "Simple greeting endpoint",
    },
    EndpointSummary {
        path: "/api/users",
        method: "GET",
        description: "Get all users or filter by id/role",
    },
    EndpointSummary {
        path: "/api/status",
        method: "GET",
        description: "API health check",
    },
    EndpointSummary {
        path: "/api/time",
        method: "GET",
        description: "Get current server time",
    },
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
    pub uptime: String,
    pub environment: String,
    pub region: String,
    pub node_version: &'static str,
    pub endpoints: [EndpointSummary; 4],
}

/// `12.346s` → `"12.35 seconds"`.
pub fn format_uptime(uptime: Duration) -> String {
    format!("{:.2} seconds", uptime.as_secs_f64())
}

pub fn health_report(
    deployment: &DeploymentConfig,
    uptime: Duration,
    now: DateTime<Utc>,
) -> StatusResponse {
    StatusResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: iso_timestamp(now),
        uptime: format_uptime(uptime),
        environment: deployment.environment.clone(),
        region: deployment.region.clone(),
        node_version: RUNTIME_VERSION,
        endpoints: ENDPOINTS,
    }
}

pub async fn status(
    method: Method,
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, ApiError> {
    ensure_get(&method)?;
    Ok(Json(health_report(
        &state.deployment,
        state.uptime(),
        Utc::now(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_two_decimals() {
        assert_eq!(format_uptime(Duration::from_millis(12_346)), "12.35 seconds");
        assert_eq!(format_uptime(Duration::ZERO), "0.00 seconds");
    }

    #[test]
    fn test_report_uses_deployment() {
        let deployment = DeploymentConfig {
            region: "iad1".into(),
            ..DeploymentConfig::default()
        };
        let report = health_report(&deployment, Duration::from_secs(3), Utc::now());

        assert_eq!(report.status, "healthy");
        assert_eq!(report.region, "iad1");
        assert_eq!(report.environment, "development");
        assert_eq!(report.uptime, "3.00 seconds");
        assert_eq!(report.endpoints.len(), 4);
    }

    #[test]
    fn test_wire_field_names() {
        let report = health_report(&DeploymentConfig::default(), Duration::ZERO, Utc::now());
        let json = serde_json::to_value(report).unwrap();
        assert!(json["nodeVersion"].as_str().unwrap().starts_with('v'));
        assert_eq!(json["endpoints"][1]["description"], "Get all users or filter by id/role");
    }
}
