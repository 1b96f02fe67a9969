//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses parse and timeouts are non-zero
//! - Check the deployment host forms a usable public URL
//!
//! Returns all validation errors, not just the first.

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field}: '{value}' is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("deployment.{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("deployment.host '{host}' does not form a valid URL: {reason}")]
    InvalidHost { host: String, reason: String },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let deployment = &config.deployment;
    if deployment.environment.trim().is_empty() {
        errors.push(ValidationError::EmptyField { field: "environment" });
    }
    if deployment.region.trim().is_empty() {
        errors.push(ValidationError::EmptyField { field: "region" });
    }

    if let Some(host) = &deployment.host {
        match Url::parse(&deployment.base_url()) {
            Ok(url) if url.host_str().is_some() && url.path() == "/" => {}
            Ok(_) => errors.push(ValidationError::InvalidHost {
                host: host.clone(),
                reason: "expected a bare host name".to_string(),
            }),
            Err(e) => errors.push(ValidationError::InvalidHost {
                host: host.clone(),
                reason: e.to_string(),
            }),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
