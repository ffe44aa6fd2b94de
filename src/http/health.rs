//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

/// Body returned by `GET /health`. Field order is part of the wire contract.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: String,
    pub version: String,
}

/// Report process liveness.
///
/// Environment and version are read from the live process environment on
/// every request rather than from the resolved [`Settings`] record, so they
/// track changes made after startup.
///
/// [`Settings`]: crate::config::Settings
pub async fn health_handler() -> Json<HealthResponse> {
    let environment = std::env::var("GO_ENV").unwrap_or_default();
    let version = match std::env::var("APP_VERSION") {
        Ok(v) if !v.is_empty() => v,
        _ => "1.0.0".to_string(),
    };

    Json(HealthResponse {
        status: "ok",
        environment,
        version,
    })
}
