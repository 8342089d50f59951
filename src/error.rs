use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::handlers::notification::Notification;

/// Application error type covering form rejection and remote-API failures.
#[derive(Debug, Error)]
pub enum AppError {
    /// A form or query parameter failed validation. Never reaches the network.
    #[error("{0}")]
    Validation(String),

    /// The accounting API answered with a non-2xx status.
    #[error("Error {code}: {reason}")]
    UpstreamStatus { code: u16, reason: String },

    /// The accounting API could not be reached, or its body could not be read.
    #[error("{0}")]
    UpstreamRequest(#[from] reqwest::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UpstreamStatus { .. } | AppError::UpstreamRequest(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

/// Errors render as a notification fragment so HTMX can swap them into the
/// notification area like any other response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }
        (status, Notification::error(self.to_string())).into_response()
    }
}
