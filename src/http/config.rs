//! HTTP Server Configuration
//!
//! Host, port, simulated latency, session TTL, seed path, and CORS origins.
//! Loaded from a JSON file; missing keys fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration load errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 1337)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Simulated network latency applied before every response, in
    /// milliseconds (default: 250). Deliberate: exercises asynchronous
    /// client behavior. Set to 0 to disable.
    #[serde(default = "default_fake_delay_ms")]
    pub fake_delay_ms: u64,

    /// Session lifetime in seconds, sliding from last access (default: 7200)
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: i64,

    /// Path to the seed dataset file (default: "./data/data.json")
    #[serde(default = "default_seed_path")]
    pub seed_path: PathBuf,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    1337
}

fn default_fake_delay_ms() -> u64 {
    250
}

fn default_session_ttl_secs() -> i64 {
    7200
}

fn default_seed_path() -> PathBuf {
    PathBuf::from("./data/data.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            fake_delay_ms: default_fake_delay_ms(),
            session_ttl_secs: default_session_ttl_secs(),
            seed_path: default_seed_path(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Create a config with a specific port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
