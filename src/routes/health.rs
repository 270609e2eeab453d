//! Health check endpoint for container orchestration.
//!
//! Reports whether the process can serve traffic, when the report was taken,
//! which deployment mode it runs in and which version is deployed. Used by
//! Kubernetes, ECS, systemd and load balancers as a liveness/readiness probe.

use axum::{extract::State, Json};
use tracing::instrument;

use crate::error::HealthError;
use crate::health::HealthyStatus;
use crate::state::AppState;

/// Health check handler.
///
/// Responds `200` with a [`HealthyStatus`] body. If the report cannot be
/// assembled, the [`HealthError`] renders as `500` with an unhealthy body.
#[instrument(name = "health::health", skip(state))]
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthyStatus>, HealthError> {
    let status = HealthyStatus::collect(state.env.as_ref(), &state.config.health.default_version)?;

    tracing::debug!(
        environment = status.environment.as_deref().unwrap_or("-"),
        version = %status.version,
        "Health report assembled"
    );

    Ok(Json(status))
}
