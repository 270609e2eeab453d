//! Vitals: a liveness/readiness health endpoint.
//!
//! The health handler reports `healthy` with the current time, deployment
//! mode and version, or `unhealthy` with the failure message when the report
//! cannot be assembled. The router from [`routes::create_router`] can be
//! served on its own by the `vitals` binary or merged into another axum app.

pub mod config;
pub mod env;
pub mod error;
pub mod health;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use env::{EnvProvider, FailingEnv, ProcessEnv, StaticEnv};
pub use error::HealthError;
pub use health::{HealthyStatus, UnhealthyStatus};
pub use routes::create_router;
pub use state::AppState;
