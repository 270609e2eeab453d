//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! HTTP caching, logging format, health reporting defaults and default paths.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Health responses - never cached, probes must see the live process
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Health Report Defaults
// =============================================================================

/// Route the health handler is mounted on when `[health] path` is unset
pub const DEFAULT_HEALTH_PATH: &str = "/api/health";

/// Environment variable holding the deployment mode ("production", "development", ...)
pub const DEFAULT_ENVIRONMENT_VAR: &str = "NODE_ENV";

/// Environment variable holding the deployed version string
pub const DEFAULT_VERSION_VAR: &str = "APP_VERSION";

/// Version reported when the version variable is unset or empty
pub const DEFAULT_VERSION: &str = "1.0.0";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default HTTP bind host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default HTTP bind port
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str =
    formatcp!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME"));

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Health report settings
    #[serde(default)]
    pub health: HealthConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Health report configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HealthConfig {
    /// Route the health handler is mounted on
    #[serde(default = "HealthConfig::default_path")]
    pub path: String,
    /// Name of the variable that supplies the `environment` field
    #[serde(default = "HealthConfig::default_environment_var")]
    pub environment_var: String,
    /// Name of the variable that supplies the `version` field
    #[serde(default = "HealthConfig::default_version_var")]
    pub version_var: String,
    /// Version reported when `version_var` is unset
    #[serde(default = "HealthConfig::default_version")]
    pub default_version: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            environment_var: Self::default_environment_var(),
            version_var: Self::default_version_var(),
            default_version: Self::default_version(),
        }
    }
}

impl HealthConfig {
    fn default_path() -> String {
        DEFAULT_HEALTH_PATH.to_string()
    }

    fn default_environment_var() -> String {
        DEFAULT_ENVIRONMENT_VAR.to_string()
    }

    fn default_version_var() -> String {
        DEFAULT_VERSION_VAR.to_string()
    }

    fn default_version() -> String {
        DEFAULT_VERSION.to_string()
    }
}

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable
    #[default]
    Text,
    /// Structured, one JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_route_path(&self.health.path)?;

        for (key, name) in [
            ("health.environment_var", &self.health.environment_var),
            ("health.version_var", &self.health.version_var),
        ] {
            if name.is_empty() || name.contains('=') {
                return Err(ConfigError::Validation(format!(
                    "{} is not a valid variable name: {:?}",
                    key, name
                )));
            }
        }

        Ok(())
    }
}

/// Rejects paths the router would refuse to mount.
///
/// Only literal paths are accepted: braces would declare a capture or
/// panic when unbalanced, and `:name`/`*name` segments panic when registered.
fn validate_route_path(path: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "health.path must start with '/', got {:?}",
            path
        )));
    }

    if path.contains(['{', '}']) {
        return Err(ConfigError::Validation(format!(
            "health.path must be a literal path without '{{' or '}}', got {:?}",
            path
        )));
    }

    if path
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
    {
        return Err(ConfigError::Validation(format!(
            "health.path segments must not start with ':' or '*', got {:?}",
            path
        )));
    }

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
