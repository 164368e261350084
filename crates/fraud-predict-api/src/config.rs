//! Server configuration

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Configuration for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_body_bytes() -> usize {
    1024 * 1024 // 1MB
}

fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid bind address '{addr}': {reason}")]
    InvalidAddress { addr: String, reason: String },

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

impl ServerConfig {
    /// Check settings and resolve the bind address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidSetting(
                "max_body_bytes must be greater than zero".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidSetting(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }

        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddress {
            addr,
            reason: e.to_string(),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
