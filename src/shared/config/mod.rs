//! Server configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file named by
//! `TRIPWIZARDS_CONFIG`, then environment variables.
//!
//! | Variable | Field |
//! |---|---|
//! | `SERVER_HOST` | `host` |
//! | `SERVER_PORT` | `port` |
//! | `DATABASE_URL` | `database_url` |
//! | `ASSISTANT_HEALTH_URL` | `assistant_health_url` |
//! | `PERSIST_TIMEOUT_MS` | `persist_timeout_ms` |

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_VAR: &str = "TRIPWIZARDS_CONFIG";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PERSIST_TIMEOUT_MS: u64 = 5_000;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// PostgreSQL connection string; the in-memory store is used when absent
    pub database_url: Option<String>,
    /// Health URL of the assistant service; not probed when absent
    pub assistant_health_url: Option<String>,
    /// Upper bound on a single chat message write
    pub persist_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: None,
            assistant_health_url: None,
            persist_timeout_ms: DEFAULT_PERSIST_TIMEOUT_MS,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => {
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| ConfigError::Io { path: path.clone(), message: e.to_string() })?;
                Self::from_toml_str(&contents)?
            }
            Err(_) => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup such as the environment
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "SERVER_PORT", value: port })?;
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            self.database_url = Some(url);
        }
        if let Some(url) = lookup("ASSISTANT_HEALTH_URL").filter(|v| !v.trim().is_empty()) {
            self.assistant_health_url = Some(url);
        }
        if let Some(ms) = lookup("PERSIST_TIMEOUT_MS") {
            self.persist_timeout_ms = ms
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PERSIST_TIMEOUT_MS", value: ms })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.host
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidValue { key: "host", value: self.host.clone() })?;
        if self.persist_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "persist_timeout_ms",
                value: "0".to_string(),
            });
        }
        if let Some(url) = &self.assistant_health_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key: "host", value: self.host.clone() })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Persistence timeout as a Duration
    pub fn persist_timeout(&self) -> Duration {
        Duration::from_millis(self.persist_timeout_ms)
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = Some(url.into());
        self
    }

    pub fn assistant_health_url(mut self, url: impl Into<String>) -> Self {
        self.config.assistant_health_url = Some(url.into());
        self
    }

    pub fn persist_timeout(mut self, timeout: Duration) -> Self {
        self.config.persist_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read config file {path}: {message}")]
    Io { path: String, message: String },
    #[error("invalid config file: {0}")]
    Toml(String),
}
