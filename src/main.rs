//! Platform Service (v1)
//!
//! Process bootstrap for the platform backend, built with Tokio and Axum.
//!
//! # Startup sequence
//!
//! ```text
//! process start
//!     → .env override file (best effort, silent on absence)
//!     → config resolver (env vars + defaults → immutable Settings)
//!     → validation (DATABASE_URL is the only hard requirement)
//!     → TCP bind on host:port
//!     → serve /health, plain or TLS depending on certificate paths
//!     → blocks until a fatal listener error
//! ```
//!
//! Database, Redis, and third-party API settings are resolved and carried in
//! the `Settings` record for downstream consumers; no client for any of them
//! is constructed here.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use platform_service::config::{validate, Settings};
use platform_service::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "platform_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("platform-service v0.1.0 starting");

    // Load the .env override file into the process environment, if present.
    // Absence or a malformed file is not an error.
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();

    if let Err(e) = validate(&settings) {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    }

    tracing::info!(
        environment = %settings.environment,
        read_timeout_secs = settings.read_timeout.as_secs(),
        write_timeout_secs = settings.write_timeout.as_secs(),
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(settings.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        environment = %settings.environment,
        tls = settings.tls_enabled(),
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(settings);
    server.run(listener).await?;

    Ok(())
}
