use serde::Deserialize;
use std::net::SocketAddr;

/// API settings.
#[derive(Debug, Deserialize, Clone)]
pub struct APIConfig {
    /// whether the liveness API is served at all
    pub enabled: bool,
    /// listening address
    pub bind: SocketAddr,
    /// maximum number of incoming connections allowed.
    pub max_connections: u32,
    /// maximum size in bytes of a request.
    pub max_request_body_size: u32,
}
