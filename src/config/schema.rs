//! Settings schema definition.

use std::time::Duration;

/// Resolved runtime settings.
///
/// Populated once at process start from environment variables (plus the
/// optional `.env` override file) and shared read-only afterwards. Every
/// field except `database_url` is guaranteed non-degenerate by defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Listen port (`GO_SERVICE_PORT`, default `"8080"`).
    pub port: String,

    /// Bind host (`GO_SERVICE_HOST`, default `"0.0.0.0"`).
    pub host: String,

    /// Deployment environment, e.g. `development` or `production`
    /// (`GO_ENV`, default `"development"`).
    pub environment: String,

    /// Database connection string (`DATABASE_URL`). Required; startup
    /// validation rejects an empty value.
    pub database_url: String,

    /// Database driver name (`DATABASE_DRIVER`, default `"postgres"`).
    pub database_driver: String,

    /// Connection pool ceiling (`MAX_DB_CONNECTIONS`, default 25).
    pub max_connections: u32,

    /// Redis host (`REDIS_HOST`, default `"localhost"`).
    pub redis_host: String,

    /// Redis port (`REDIS_PORT`, default `"6379"`).
    pub redis_port: String,

    /// Redis password (`REDIS_PASSWORD`, empty when unset).
    pub redis_password: String,

    /// Redis logical database index (`REDIS_DB`, default 0).
    pub redis_db: u32,

    /// Stripe secret key (`STRIPE_API_KEY`, empty when unset).
    pub stripe_api_key: String,

    /// Twilio account SID (`TWILIO_ACCOUNT_SID`, empty when unset).
    pub twilio_sid: String,

    /// Twilio auth token (`TWILIO_AUTH_TOKEN`, empty when unset).
    pub twilio_token: String,

    /// Datadog API key (`DATADOG_API_KEY`, empty when unset).
    pub datadog_api_key: String,

    /// Datadog application key (`DATADOG_APP_KEY`, empty when unset).
    pub datadog_app_key: String,

    /// Metrics feature flag (`ENABLE_METRICS`, default true).
    pub enable_metrics: bool,

    /// Tracing feature flag (`ENABLE_TRACING`, default false).
    pub enable_tracing: bool,

    /// Listener read timeout (`READ_TIMEOUT_SECONDS`, default 30s).
    pub read_timeout: Duration,

    /// Listener write timeout (`WRITE_TIMEOUT_SECONDS`, default 30s).
    pub write_timeout: Duration,

    /// Path to a PEM certificate file (`TLS_CERT_FILE`, empty disables TLS).
    pub tls_cert_file: String,

    /// Path to a PEM private key file (`TLS_KEY_FILE`, empty disables TLS).
    pub tls_key_file: String,
}

impl Settings {
    /// Listener address in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// TLS is active only when both certificate and key paths are set.
    pub fn tls_enabled(&self) -> bool {
        !self.tls_cert_file.is_empty() && !self.tls_key_file.is_empty()
    }
}

impl Default for Settings {
    /// Settings as resolved from a completely empty environment.
    fn default() -> Self {
        Self::resolve(|_| None)
    }
}
