//! Platform Service Library
//!
//! Process bootstrap for the platform backend: resolves runtime settings from
//! the environment, validates them, and serves the liveness endpoint over
//! HTTP or HTTPS.

pub mod config;
pub mod http;
pub mod net;

pub use config::Settings;
pub use http::HttpServer;
