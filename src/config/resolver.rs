//! Environment resolution.
//!
//! # Responsibilities
//! - Read each setting from a key-value lookup (the process environment in
//!   production, a plain map in tests)
//! - Substitute documented defaults for unset or empty variables
//! - Coerce integer, boolean, and duration values
//!
//! # Design Decisions
//! - Resolution is total and never logs: malformed numeric input degrades to
//!   zero rather than to the documented default, and booleans are an exact
//!   string comparison against `"true"`
//! - Secret-like variables carry no default and resolve to the empty string

use std::time::Duration;

use crate::config::schema::Settings;

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve settings from an arbitrary key-value lookup.
    ///
    /// Never fails: unset or empty variables take the documented default,
    /// and values that fail numeric parsing resolve to zero.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| -> String {
            match lookup(key) {
                Some(value) if !value.is_empty() => value,
                _ => default.to_string(),
            }
        };
        let get_u32 = |key: &str, default: &str| get(key, default).parse::<u32>().unwrap_or(0);
        let get_secs =
            |key: &str, default: &str| Duration::from_secs(get(key, default).parse().unwrap_or(0));
        let get_flag = |key: &str, default: &str| get(key, default) == "true";
        let raw = |key: &str| lookup(key).unwrap_or_default();

        Settings {
            port: get("GO_SERVICE_PORT", "8080"),
            host: get("GO_SERVICE_HOST", "0.0.0.0"),
            environment: get("GO_ENV", "development"),

            database_url: raw("DATABASE_URL"),
            database_driver: get("DATABASE_DRIVER", "postgres"),
            max_connections: get_u32("MAX_DB_CONNECTIONS", "25"),

            redis_host: get("REDIS_HOST", "localhost"),
            redis_port: get("REDIS_PORT", "6379"),
            redis_password: raw("REDIS_PASSWORD"),
            redis_db: get_u32("REDIS_DB", "0"),

            stripe_api_key: raw("STRIPE_API_KEY"),
            twilio_sid: raw("TWILIO_ACCOUNT_SID"),
            twilio_token: raw("TWILIO_AUTH_TOKEN"),

            datadog_api_key: raw("DATADOG_API_KEY"),
            datadog_app_key: raw("DATADOG_APP_KEY"),

            enable_metrics: get_flag("ENABLE_METRICS", "true"),
            enable_tracing: get_flag("ENABLE_TRACING", "false"),

            read_timeout: get_secs("READ_TIMEOUT_SECONDS", "30"),
            write_timeout: get_secs("WRITE_TIMEOUT_SECONDS", "30"),

            tls_cert_file: raw("TLS_CERT_FILE"),
            tls_key_file: raw("TLS_KEY_FILE"),
        }
    }
}
