//! Configuration module for the Developer Directory backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON file holding all developers
    pub data_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let data_path = env::var("DEVDIR_DATA_PATH")
            .unwrap_or_else(|_| "./data/developers.json".to_string())
            .into();

        let raw_addr = env::var("DEVDIR_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());
        let mut bind_addr: SocketAddr = raw_addr.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Invalid {
                var: "DEVDIR_BIND_ADDR",
                value: raw_addr.clone(),
                reason: e.to_string(),
            }
        })?;

        // Hosting platforms hand out the port through PORT.
        if let Ok(port) = env::var("PORT") {
            let port = port.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                value: port.clone(),
                reason: e.to_string(),
            })?;
            bind_addr.set_port(port);
        }

        let log_level = env::var("DEVDIR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("DEVDIR_LOG_FORMAT") {
            Ok(raw) => LogFormat::from_str(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "DEVDIR_LOG_FORMAT",
                value: raw.clone(),
                reason: "expected `pretty` or `json`".to_string(),
            })?,
            Err(_) => LogFormat::Pretty,
        };

        Ok(Self {
            data_path,
            bind_addr,
            log_level,
            log_format,
        })
    }
}
