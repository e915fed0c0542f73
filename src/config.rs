//! Server configuration loaded from command-line flags and environment variables.

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Comma-separated list of allowed CORS origins.
pub const CORS_ORIGINS_ENV: &str = "PORT_REGISTRY_CORS_ORIGINS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}

/// Settings for the HTTP server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            cors_origins: None,
        }
    }

    /// Read the CORS allow-list from `PORT_REGISTRY_CORS_ORIGINS`.
    pub fn with_cors_from_env(self) -> Self {
        let origins = std::env::var(CORS_ORIGINS_ENV).ok();
        self.with_cors_origins(origins.as_deref().and_then(parse_origins))
    }

    pub fn with_cors_origins(mut self, origins: Option<Vec<String>>) -> Self {
        self.cors_origins = origins;
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

/// Split a comma-separated origin list. Blank entries are dropped and an
/// empty list means "not configured".
fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if origins.is_empty() {
        None
    } else {
        Some(origins)
    }
}
