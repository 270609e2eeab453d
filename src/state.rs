//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::env::{EnvProvider, ProcessEnv};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Both fields are read-only after startup, so concurrent requests need no
/// synchronization.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub env: Arc<dyn EnvProvider>,
}

impl AppState {
    /// Creates a new application state with an explicit value provider.
    pub fn new(config: AppConfig, env: impl EnvProvider + 'static) -> Self {
        Self {
            config: Arc::new(config),
            env: Arc::new(env),
        }
    }

    /// Creates state that reads values from the process environment, using
    /// the variable names in `config.health`.
    pub fn from_config(config: AppConfig) -> Self {
        let env = ProcessEnv::from_config(&config.health);
        Self::new(config, env)
    }
}
