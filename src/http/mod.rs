//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! Settings → server.rs (router + timeout/trace layers)
//!     → health.rs (GET /health)
//!     → plain axum::serve, or axum-server with rustls when TLS paths are set
//! ```

pub mod health;
pub mod server;

pub use server::HttpServer;
