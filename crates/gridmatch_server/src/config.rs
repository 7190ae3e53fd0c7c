//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `GRIDMATCH_*` environment variables, then command-line flags.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Environment variable overriding [`ServerConfig::host`].
pub const HOST_VAR: &str = "GRIDMATCH_HOST";
/// Environment variable overriding [`ServerConfig::port`].
pub const PORT_VAR: &str = "GRIDMATCH_PORT";
/// Environment variable overriding [`ServerConfig::log_filter`].
pub const LOG_VAR: &str = "GRIDMATCH_LOG";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    host: String,

    /// Port to bind to.
    port: u16,

    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from TOML file. Missing keys keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if given, then applies environment overrides.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// Applies `GRIDMATCH_*` overrides using `lookup` to read variables.
    #[instrument(skip(self, lookup))]
    pub fn with_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup(HOST_VAR) {
            self.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.port = port.trim().parse().map_err(|e| {
                ConfigError::new(format!("{PORT_VAR} must be a port number, got '{port}': {e}"))
            })?;
        }
        if let Some(filter) = lookup(LOG_VAR) {
            self.log_filter = filter;
        }
        debug!(config = ?self, "Applied environment overrides");
        Ok(self)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// `host:port` string to bind the listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
