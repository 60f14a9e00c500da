use crate::error::ConfigError;
use serde::Deserialize;
use std::net::SocketAddr;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub buda: BudaConfig,
}

/// Contains parameters for the HTTP listener.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The interface to bind (e.g., "0.0.0.0").
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Combines host and port into a bindable socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(format!("{}:{}", self.host, self.port)))
    }
}

/// Contains parameters for the upstream Buda market-data API.
#[derive(Debug, Clone, Deserialize)]
pub struct BudaConfig {
    /// Base URL of the API, without a trailing slash
    /// (e.g., "https://www.buda.com/api/v2").
    pub base_url: String,
    /// Upper bound on each upstream call. Expiry surfaces as an upstream
    /// error on the request that hit it.
    pub timeout_secs: u64,
}
