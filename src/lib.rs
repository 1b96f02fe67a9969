//! Serverless API demo library.
//!
//! Five independent GET-only JSON endpoints (index, hello, status, time,
//! users) behind an Axum router.

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
