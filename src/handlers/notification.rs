use askama::Template;

use crate::error::AppError;

/// Notification fragment swapped into the page's notification area.
#[derive(Template)]
#[template(path = "notification.html")]
pub struct Notification {
    pub kind: &'static str,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "error",
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: "info",
            message: message.into(),
        }
    }
}

/// Fallback shown inside a panel when its data cannot be loaded. When the
/// failure detail is present it is also surfaced as an out-of-band error
/// notification; the server-rendered first page leaves it empty so the
/// degraded panel renders without a stray notification block.
#[derive(Template)]
#[template(path = "fragments/panel_error.html")]
pub struct PanelError {
    pub message: String,
    pub detail: String,
}

impl PanelError {
    pub fn new(message: impl Into<String>, err: &AppError) -> Self {
        Self {
            message: message.into(),
            detail: err.to_string(),
        }
    }

    /// Panel fallback without the notification side channel.
    pub fn inline(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: String::new(),
        }
    }
}
