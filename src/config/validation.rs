//! Startup validation.
//!
//! # Responsibilities
//! - Reject configurations that cannot possibly serve traffic
//! - Runs once, after resolution and before the listener is opened
//!
//! # Design Decisions
//! - Only `DATABASE_URL` is mandatory; every other field resolves to a
//!   usable value through defaults, so there is nothing else to check

use thiserror::Error;

use crate::config::schema::Settings;

/// Fatal configuration error raised before the server starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is required")]
    MissingDatabaseUrl,
}

/// Validate resolved settings, failing fast on missing required fields.
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.database_url.is_empty() {
        return Err(ConfigError::MissingDatabaseUrl);
    }
    Ok(())
}
