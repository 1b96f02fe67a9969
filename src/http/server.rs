//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all endpoint handlers
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Bind server to listener
//! - Stop accepting on shutdown and drain in-flight requests

use axum::{routing::any, Router};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api::{hello, index, status, time, users};
use crate::config::{DeploymentConfig, ServiceConfig};
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::http::response::ApiError;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub deployment: Arc<DeploymentConfig>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(deployment: DeploymentConfig) -> Self {
        Self {
            deployment: Arc::new(deployment),
            started_at: Instant::now(),
        }
    }

    /// Time since the server state was created.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// HTTP server for the API endpoints.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState::new(config.deployment.clone());
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/api", any(index::index))
            .route("/api/", any(index::index))
            .route("/api/index", any(index::index))
            .route("/api/hello", any(hello::hello))
            .route("/api/status", any(status::status))
            .route("/api/time", any(time::time))
            .route("/api/users", any(users::users))
            .fallback(not_found)
            .with_state(state)
            .layer(axum::middleware::from_fn(metrics::track_requests))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// A clone of the fully layered router, for in-process dispatch.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = %self.config.deployment.environment,
            region = %self.config.deployment.region,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn not_found(uri: axum::http::Uri) -> ApiError {
    tracing::warn!(path = %uri.path(), "No route matched");
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
