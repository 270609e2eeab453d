use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::health::UnhealthyStatus;

/// Reported in place of a failure that carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Failure while assembling a health report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HealthError {
    #[error("Environment variable {var} is set but is not valid unicode")]
    Unreadable { var: String },

    #[error("{0}")]
    Internal(String),

    #[error("Unknown error")]
    Unknown,
}

impl HealthError {
    /// Message placed in the `error` field of an unhealthy report.
    ///
    /// Failures with an empty message are reported as [`UNKNOWN_ERROR`].
    pub fn reason(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for HealthError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "Health report construction failed");

        let body = UnhealthyStatus::now(self.reason());
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_uses_message() {
        assert_eq!(HealthError::Internal("boom".to_string()).reason(), "boom");
    }

    #[test]
    fn test_reason_falls_back_on_empty_message() {
        assert_eq!(HealthError::Internal(String::new()).reason(), "Unknown error");
    }

    #[test]
    fn test_reason_unknown() {
        assert_eq!(HealthError::Unknown.reason(), "Unknown error");
    }

    #[test]
    fn test_reason_unreadable_names_variable() {
        let err = HealthError::Unreadable {
            var: "APP_VERSION".to_string(),
        };
        assert!(err.reason().contains("APP_VERSION"));
    }

    #[test]
    fn test_into_response_is_internal_server_error() {
        let response = HealthError::Unknown.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
