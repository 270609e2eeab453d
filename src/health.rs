//! Health report records.
//!
//! A request produces exactly one of [`HealthyStatus`] or [`UnhealthyStatus`].
//! Both are built, serialized and dropped within a single request.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::env::EnvProvider;
use crate::error::HealthError;

pub const STATUS_HEALTHY: &str = "healthy";
pub const STATUS_UNHEALTHY: &str = "unhealthy";

/// Formats a timestamp as ISO-8601 in UTC with millisecond precision,
/// e.g. `2026-10-17T08:30:00.123Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Report returned with `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthyStatus {
    pub status: &'static str,
    pub timestamp: String,
    /// Omitted from the JSON body when the deployment mode is not configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    pub version: String,
}

impl HealthyStatus {
    /// Assembles a report from the current time and `env`.
    ///
    /// An unset or empty version falls back to `default_version`. Any read
    /// failure is returned as-is for the caller to report.
    pub fn collect(env: &dyn EnvProvider, default_version: &str) -> Result<Self, HealthError> {
        let timestamp = iso_timestamp(Utc::now());
        let environment = env.deployment_mode()?;
        let version = env
            .version_string()?
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default_version.to_string());

        Ok(Self {
            status: STATUS_HEALTHY,
            timestamp,
            environment,
            version,
        })
    }
}

/// Report returned with `500 Internal Server Error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnhealthyStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub error: String,
}

impl UnhealthyStatus {
    /// Builds a report stamped with a fresh timestamp.
    pub fn now(error: impl Into<String>) -> Self {
        Self {
            status: STATUS_UNHEALTHY,
            timestamp: iso_timestamp(Utc::now()),
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FailingEnv, StaticEnv};
    use chrono::TimeZone;

    #[test]
    fn test_iso_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 8, 30, 0).unwrap();
        assert_eq!(iso_timestamp(at), "2026-10-17T08:30:00.000Z");
    }

    #[test]
    fn test_collect_uses_default_version_when_unset() {
        let env = StaticEnv::new(Some("production"), None);
        let status = HealthyStatus::collect(&env, "1.0.0").unwrap();
        assert_eq!(status.status, "healthy");
        assert_eq!(status.environment.as_deref(), Some("production"));
        assert_eq!(status.version, "1.0.0");
    }

    #[test]
    fn test_collect_uses_default_version_when_empty() {
        let env = StaticEnv::new(None, Some(""));
        let status = HealthyStatus::collect(&env, "1.0.0").unwrap();
        assert_eq!(status.version, "1.0.0");
    }

    #[test]
    fn test_collect_uses_configured_version() {
        let env = StaticEnv::new(None, Some("3.1.4"));
        let status = HealthyStatus::collect(&env, "1.0.0").unwrap();
        assert_eq!(status.version, "3.1.4");
        assert_eq!(status.environment, None);
    }

    #[test]
    fn test_collect_timestamp_within_window() {
        let before = Utc::now();
        let status = HealthyStatus::collect(&StaticEnv::default(), "1.0.0").unwrap();
        let after = Utc::now();

        let parsed = DateTime::parse_from_rfc3339(&status.timestamp)
            .unwrap()
            .with_timezone(&Utc);
        // Millisecond truncation can put the parsed value just before `before`.
        assert!(parsed >= before - chrono::Duration::milliseconds(1));
        assert!(parsed <= after);
    }

    #[test]
    fn test_collect_propagates_failure() {
        let env = FailingEnv(HealthError::Internal("boom".to_string()));
        let err = HealthyStatus::collect(&env, "1.0.0").unwrap_err();
        assert_eq!(err, HealthError::Internal("boom".to_string()));
    }

    #[test]
    fn test_healthy_serialization_omits_missing_environment() {
        let status = HealthyStatus {
            status: STATUS_HEALTHY,
            timestamp: "2026-10-17T08:30:00.000Z".to_string(),
            environment: None,
            version: "1.0.0".to_string(),
        };
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(
            json,
            r#"{"status":"healthy","timestamp":"2026-10-17T08:30:00.000Z","version":"1.0.0"}"#
        );
    }

    #[test]
    fn test_healthy_serialization_field_order() {
        let status = HealthyStatus {
            status: STATUS_HEALTHY,
            timestamp: "2026-10-17T08:30:00.000Z".to_string(),
            environment: Some("production".to_string()),
            version: "1.0.0".to_string(),
        };
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(
            json,
            r#"{"status":"healthy","timestamp":"2026-10-17T08:30:00.000Z","environment":"production","version":"1.0.0"}"#
        );
    }

    #[test]
    fn test_unhealthy_now() {
        let status = UnhealthyStatus::now("boom");
        assert_eq!(status.status, "unhealthy");
        assert_eq!(status.error, "boom");
        assert!(DateTime::parse_from_rfc3339(&status.timestamp).is_ok());
    }
}
