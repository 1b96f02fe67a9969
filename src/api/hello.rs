//! Greeting endpoint: `/api/hello`.

use axum::{extract::RawQuery, http::Method, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::iso_timestamp;
use crate::http::request::{ensure_get, QueryParams};
use crate::http::response::ApiError;

pub const DEFAULT_NAME: &str = "Gurjas";

#[derive(Debug, Clone, Serialize)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: String,
    pub endpoint: &'static str,
    pub method: &'static str,
    pub serverless: bool,
}

/// Build the greeting for `name` (or the default) at `now`.
pub fn greet(name: Option<&str>, now: DateTime<Utc>) -> HelloResponse {
    let name = name.unwrap_or(DEFAULT_NAME);
    HelloResponse {
        message: format!("Hello {} 👋! Vercel API is live.", name),
        timestamp: iso_timestamp(now),
        endpoint: "/api/hello",
        method: "GET",
        serverless: true,
    }
}

pub async fn hello(
    method: Method,
    RawQuery(query): RawQuery,
) -> Result<Json<HelloResponse>, ApiError> {
    ensure_get(&method)?;

    let params = QueryParams::parse(query.as_deref());
    let name = params.get("name");
    tracing::debug!(name = ?name, "Greeting");

    Ok(Json(greet(name, Utc::now())))
}
