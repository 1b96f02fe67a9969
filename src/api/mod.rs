//! Endpoint handlers.
//!
//! # Data Flow
//! ```text
//! axum Router (http/server.rs)
//!     → handler: method check (GET only)
//!     → typed query extraction
//!     → pure builder computes the response document
//!     → Json<T> on success, ApiError otherwise (http/response.rs)
//! ```
//!
//! Every handler is independent; none calls another. Builders take the
//! current instant as an argument so tests can pin the clock.

pub mod hello;
pub mod index;
pub mod status;
pub mod time;
pub mod users;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Human-facing service name.
pub const SERVICE_NAME: &str = "Vercel API Demo";

/// Published API version.
pub const API_VERSION: &str = "1.0.0";

/// Runtime version reported by the status endpoint.
pub const RUNTIME_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-01-15T17:30:45.123Z`.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Short description of a sibling endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointSummary {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}
