//! Network layer: TLS credential loading for the listener.

pub mod tls;
