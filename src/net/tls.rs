//! TLS configuration and certificate loading.

use std::io;
use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

/// Load a rustls server configuration from PEM certificate and key files.
///
/// Missing files are reported up front with their paths; parse errors
/// surface from the underlying loader.
pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> io::Result<RustlsConfig> {
    if !cert_path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("certificate file not found: {}", cert_path.display()),
        ));
    }
    if !key_path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("private key file not found: {}", key_path.display()),
        ));
    }

    RustlsConfig::from_pem_file(cert_path, key_path).await
}
