use std::net::SocketAddr;

use crate::middlewares::response_formatter::FormatterConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16 number, got `{0}`")]
    InvalidPort(String),

    #[error("APP_HOST:APP_PORT must form a valid socket address, got `{0}`")]
    InvalidAddr(String),
}

/// CORS policy resolved from `ENABLE_CORS` / `CORS_ALLOWED_ORIGINS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    Disabled,
    Any,
    Origins(Vec<String>),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Reported as `metadata.version` in every envelope.
    pub api_version: String,
    pub cors: CorsPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3002,
            api_version: env!("CARGO_PKG_VERSION").to_string(),
            cors: CorsPolicy::Disabled,
        }
    }
}

impl AppConfig {
    /// | Env Var                | Default         |
    /// |------------------------|-----------------|
    /// | `APP_HOST`             | `127.0.0.1`     |
    /// | `APP_PORT`             | `3002`          |
    /// | `API_VERSION`          | crate version   |
    /// | `ENABLE_CORS`          | `false`         |
    /// | `CORS_ALLOWED_ORIGINS` | unset           |
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = std::env::var("APP_HOST").unwrap_or(defaults.host);

        let port = match std::env::var("APP_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => defaults.port,
        };

        let api_version = std::env::var("API_VERSION")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_version);

        let enable_cors = std::env::var("ENABLE_CORS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let cors = parse_cors(std::env::var("CORS_ALLOWED_ORIGINS").ok(), enable_cors);

        Ok(Self {
            host,
            port,
            api_version,
            cors,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddr(raw))
    }

    pub fn formatter(&self) -> FormatterConfig {
        FormatterConfig::new(self.api_version.clone())
    }
}

fn parse_cors(allowed: Option<String>, enable: bool) -> CorsPolicy {
    match allowed {
        Some(list) if list.trim() == "*" => CorsPolicy::Any,
        Some(list) => {
            let origins: Vec<String> = list
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if origins.is_empty() {
                CorsPolicy::Any
            } else {
                CorsPolicy::Origins(origins)
            }
        }
        None if enable => CorsPolicy::Any,
        None => CorsPolicy::Disabled,
    }
}
