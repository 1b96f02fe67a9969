//! Documentation index: `/api`, `/api/` and `/api/index`.

use std::collections::BTreeMap;

use axum::{extract::State, http::Method, Json};
use serde::Serialize;

use crate::api::API_VERSION;
use crate::config::DeploymentConfig;
use crate::http::request::ensure_get;
use crate::http::response::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub documentation: Documentation,
    pub deployment: DeploymentInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct Documentation {
    pub endpoints: Vec<EndpointDoc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDoc {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
    pub example: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_params: Option<BTreeMap<&'static str, &'static str>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeploymentInfo {
    pub platform: String,
    pub repository: String,
    pub environment: String,
}

/// One catalog entry: path, description, example query, parameters.
struct CatalogEntry {
    path: &'static str,
    description: &'static str,
    example_query: &'static str,
    params: &'static [(&'static str, &'static str)],
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        path: "/api/hello",
        description: "Simple greeting endpoint",
        example_query: "?name=YourName",
        params: &[("name", "Optional - Your name (default: Gurjas)")],
    },
    CatalogEntry {
        path: "/api/users",
        description: "Get users list with optional filtering",
        example_query: "?role=admin",
        params: &[
            ("id", "Optional - Get user by ID"),
            ("role", "Optional - Filter users by role (admin, user, moderator)"),
        ],
    },
    CatalogEntry {
        path: "/api/status",
        description: "API health check and system information",
        example_query: "",
        params: &[],
    },
    CatalogEntry {
        path: "/api/time",
        description: "Get current server time",
        example_query: "?timezone=America/New_York",
        params: &[("timezone", "Optional - IANA timezone (default: UTC)")],
    },
];

/// Build the catalog with example links rooted at the deployment's base URL.
pub fn catalog(deployment: &DeploymentConfig) -> IndexResponse {
    let base_url = deployment.base_url();

    let endpoints = CATALOG
        .iter()
        .map(|entry| EndpointDoc {
            path: entry.path,
            method: "GET",
            description: entry.description,
            example: format!("{}{}{}", base_url, entry.path, entry.example_query),
            query_params: (!entry.params.is_empty())
                .then(|| entry.params.iter().copied().collect()),
        })
        .collect();

    IndexResponse {
        message: "Welcome to Vercel API Demo 🚀",
        version: API_VERSION,
        documentation: Documentation { endpoints },
        deployment: DeploymentInfo {
            platform: deployment.platform.clone(),
            repository: deployment.repository.clone(),
            environment: deployment.environment.clone(),
        },
    }
}

pub async fn index(
    method: Method,
    State(state): State<AppState>,
) -> Result<Json<IndexResponse>, ApiError> {
    ensure_get(&method)?;
    Ok(Json(catalog(&state.deployment)))
}
