//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (interval and timeout > 0)
//! - Check the source URL is addressable
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over SyncConfig
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::SyncConfig;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("source.url must not be empty")]
    EmptySourceUrl,

    #[error("source.url is not a valid URL: {0}")]
    InvalidSourceUrl(String),

    #[error("refresh.interval_ms must be greater than zero")]
    ZeroInterval,

    #[error("fetch.timeout_ms must be greater than zero")]
    ZeroTimeout,
}

/// Check a loaded configuration for semantic errors.
pub fn validate_config(config: &SyncConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.source.url.is_empty() {
        errors.push(ValidationError::EmptySourceUrl);
    } else if let Err(e) = Url::parse(&config.source.url) {
        errors.push(ValidationError::InvalidSourceUrl(e.to_string()));
    }

    if config.refresh.interval_ms == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    if config.fetch.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
