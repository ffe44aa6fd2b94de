//! Integration tests for the bootstrap and the health endpoint.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use platform_service::config::Settings;
use platform_service::http::HttpServer;

/// Resolve settings from a fixed set of variables, nothing from the real
/// environment.
fn settings_from(pairs: &[(&str, &str)]) -> Settings {
    Settings::resolve(|key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
}

/// Bind an ephemeral port and serve in the background.
async fn spawn_server(settings: Settings) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        HttpServer::new(settings).run(listener).await.unwrap();
    });

    addr
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[tokio::test]
async fn health_reflects_live_environment() {
    let settings = settings_from(&[("DATABASE_URL", "postgres://localhost/app")]);
    let addr = spawn_server(settings).await;
    let url = format!("http://{addr}/health");

    // The handler reads GO_ENV and APP_VERSION at request time, so changes
    // after startup are visible immediately.
    std::env::set_var("GO_ENV", "staging");
    std::env::set_var("APP_VERSION", "2.3.1");

    let response = reqwest::get(&url).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"status":"ok","environment":"staging","version":"2.3.1"}"#
    );

    std::env::remove_var("GO_ENV");
    std::env::remove_var("APP_VERSION");

    let response = reqwest::get(&url).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"status":"ok","environment":"","version":"1.0.0"}"#
    );
}

#[tokio::test]
async fn unknown_routes_get_default_not_found() {
    let settings = settings_from(&[("DATABASE_URL", "postgres://localhost/app")]);
    let addr = spawn_server(settings).await;

    let response = reqwest::get(format!("http://{addr}/nope")).await.unwrap();
    assert_eq!(response.status(), 404);

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn health_served_over_tls_when_paths_configured() {
    let cert = fixture("cert.pem");
    let key = fixture("key.pem");
    let settings = settings_from(&[
        ("DATABASE_URL", "postgres://localhost/app"),
        ("TLS_CERT_FILE", cert.as_str()),
        ("TLS_KEY_FILE", key.as_str()),
    ]);
    assert!(settings.tls_enabled());

    let addr = spawn_server(settings).await;

    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .build()
        .unwrap();

    let response = client
        .get(format!("https://{addr}/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // GO_ENV / APP_VERSION are exercised elsewhere; the process environment
    // is shared across tests, so only the stable part of the body is checked.
    let body = response.text().await.unwrap();
    assert!(body.starts_with(r#"{"status":"ok","environment":""#));
}

#[test]
fn missing_database_url_terminates_before_listening() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_platform-service"))
        .env_remove("DATABASE_URL")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let logs = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(logs.contains("DATABASE_URL is required"));
}

#[tokio::test]
async fn tls_listener_rejects_plain_http() {
    let cert = fixture("cert.pem");
    let key = fixture("key.pem");
    let settings = settings_from(&[
        ("DATABASE_URL", "postgres://localhost/app"),
        ("TLS_CERT_FILE", cert.as_str()),
        ("TLS_KEY_FILE", key.as_str()),
    ]);
    let addr = spawn_server(settings).await;

    // A plain-text request against the TLS listener must not succeed.
    let result = reqwest::get(format!("http://{addr}/health")).await;
    assert!(result.is_err() || !result.unwrap().status().is_success());
}
