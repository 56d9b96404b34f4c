//! Error types for the marketplace notifications domain.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use validator::ValidationErrors;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Errors raised while handling a marketplace event.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// A destination webhook URL is not configured.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The `type` query parameter or the JSON body failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// The webhook request could not be sent.
    #[error("Webhook delivery failed: {0}")]
    Dispatch(String),

    /// The webhook endpoint answered with a non-success status.
    #[error("Webhook rejected delivery ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// The webhook URL embeds its secret token, so it is stripped before the
/// error text is kept.
impl From<reqwest::Error> for NotificationError {
    fn from(err: reqwest::Error) -> Self {
        NotificationError::Dispatch(err.without_url().to_string())
    }
}

/// Every error that reaches the caller is a bare 500; details stay in the logs.
impl IntoResponse for NotificationError {
    fn into_response(self) -> Response {
        match &self {
            NotificationError::Configuration(msg) => {
                tracing::error!(
                    error = %msg,
                    "Rejecting request: webhook destinations not configured"
                );
            }
            NotificationError::Validation(errors) => {
                tracing::warn!(
                    errors = %errors,
                    "Rejecting request: event payload failed validation"
                );
            }
            NotificationError::Dispatch(_) | NotificationError::Rejected { .. } => {
                tracing::error!(error = %self, "Webhook delivery error reached the response");
            }
        }

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_every_error_maps_to_empty_500() {
        let mut validation = ValidationErrors::new();
        validation.add("price", ValidationError::new("required"));

        let errors = vec![
            NotificationError::Configuration("DISCORD_SOLD_WEBHOOK".to_string()),
            NotificationError::Validation(validation),
            NotificationError::Dispatch("connection refused".to_string()),
        ];

        for error in errors {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_rejected_message_includes_status() {
        let err = NotificationError::Rejected {
            status: 404,
            body: "Unknown Webhook".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Webhook rejected delivery (404): Unknown Webhook"
        );
    }
}
