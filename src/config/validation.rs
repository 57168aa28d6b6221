//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the custom domain the same way the resolver will
//! - Check the log filter parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::ClientConfig;
use crate::resolver::{validate_domain, ResolveError};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server.domain: {0}")]
    Domain(ResolveError),

    #[error("observability.log_level: invalid filter '{0}'")]
    LogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(domain) = &config.server.domain {
        if let Err(e) = validate_domain(domain) {
            errors.push(ValidationError::Domain(e));
        }
    }

    let level = config.observability.log_level.trim();
    if level.is_empty() || EnvFilter::try_new(level).is_err() {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
