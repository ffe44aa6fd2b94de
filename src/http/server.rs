//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the health route
//! - Wire up middleware (tracing, read/write timeouts)
//! - Serve connections, plain or TLS-terminated
//!
//! Requests to any path other than `/health` get Axum's default 404/405
//! responses; there is no other routing.

use std::path::Path;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    timeout::{ResponseBodyTimeoutLayer, TimeoutLayer},
    trace::TraceLayer,
};

use crate::config::Settings;
use crate::http::health::health_handler;
use crate::net::tls::load_tls_config;

/// HTTP server for the platform service.
pub struct HttpServer {
    router: Router,
    settings: Settings,
}

impl HttpServer {
    /// Create a new HTTP server with the given settings.
    pub fn new(settings: Settings) -> Self {
        let router = Self::build_router(&settings);
        Self { router, settings }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Read timeout bounds request handling, write timeout bounds streaming
    /// of the response body. A zero timeout disables the corresponding bound.
    fn build_router(settings: &Settings) -> Router {
        let mut router = Router::new().route("/health", get(health_handler));

        if !settings.write_timeout.is_zero() {
            router = router.layer(ResponseBodyTimeoutLayer::new(settings.write_timeout));
        }
        if !settings.read_timeout.is_zero() {
            router = router.layer(TimeoutLayer::new(settings.read_timeout));
        }

        router.layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Blocks until the listener fails irrecoverably. TLS is used when both
    /// certificate and key paths are configured; a certificate load failure
    /// is returned before any connection is accepted.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;

        if self.settings.tls_enabled() {
            let tls = load_tls_config(
                Path::new(&self.settings.tls_cert_file),
                Path::new(&self.settings.tls_key_file),
            )
            .await?;

            tracing::info!(address = %addr, "HTTPS server starting");
            axum_server::from_tcp_rustls(listener.into_std()?, tls)
                .serve(self.router.into_make_service())
                .await
        } else {
            tracing::info!(address = %addr, "HTTP server starting");
            axum::serve(listener, self.router.into_make_service()).await
        }
    }
}
