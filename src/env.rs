//! Read-only sources for the values a health report echoes back.
//!
//! Handlers never touch the process environment directly; they go through an
//! [`EnvProvider`] held in application state. [`ProcessEnv`] is what the
//! binary uses. [`StaticEnv`] and [`FailingEnv`] serve embedding and tests.

use std::env::VarError;

use crate::config::HealthConfig;
use crate::error::HealthError;

/// Source of the deployment mode and version string.
///
/// `Ok(None)` means the value is not configured. `Err` means it exists but
/// could not be read, which turns the report unhealthy.
pub trait EnvProvider: Send + Sync {
    /// Deployment mode, e.g. "production" or "development".
    fn deployment_mode(&self) -> Result<Option<String>, HealthError>;

    /// Version string of the running build.
    fn version_string(&self) -> Result<Option<String>, HealthError>;
}

/// Reads values from process environment variables.
#[derive(Debug, Clone)]
pub struct ProcessEnv {
    environment_var: String,
    version_var: String,
}

impl ProcessEnv {
    pub fn new(environment_var: impl Into<String>, version_var: impl Into<String>) -> Self {
        Self {
            environment_var: environment_var.into(),
            version_var: version_var.into(),
        }
    }

    /// Uses the variable names from the `[health]` config section.
    pub fn from_config(config: &HealthConfig) -> Self {
        Self::new(&config.environment_var, &config.version_var)
    }

    fn read(name: &str) -> Result<Option<String>, HealthError> {
        match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(HealthError::Unreadable {
                var: name.to_string(),
            }),
        }
    }
}

impl EnvProvider for ProcessEnv {
    fn deployment_mode(&self) -> Result<Option<String>, HealthError> {
        Self::read(&self.environment_var)
    }

    fn version_string(&self) -> Result<Option<String>, HealthError> {
        Self::read(&self.version_var)
    }
}

/// Fixed values, independent of the process environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    pub environment: Option<String>,
    pub version: Option<String>,
}

impl StaticEnv {
    pub fn new(environment: Option<&str>, version: Option<&str>) -> Self {
        Self {
            environment: environment.map(str::to_string),
            version: version.map(str::to_string),
        }
    }
}

impl EnvProvider for StaticEnv {
    fn deployment_mode(&self) -> Result<Option<String>, HealthError> {
        Ok(self.environment.clone())
    }

    fn version_string(&self) -> Result<Option<String>, HealthError> {
        Ok(self.version.clone())
    }
}

/// Fails every read with the given error. Used for fault injection.
#[derive(Debug, Clone)]
pub struct FailingEnv(pub HealthError);

impl EnvProvider for FailingEnv {
    fn deployment_mode(&self) -> Result<Option<String>, HealthError> {
        Err(self.0.clone())
    }

    fn version_string(&self) -> Result<Option<String>, HealthError> {
        Err(self.0.clone())
    }
}
