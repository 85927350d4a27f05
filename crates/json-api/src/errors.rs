//! JSON error envelope.

use std::{
    collections::BTreeMap,
    fmt::Display,
    sync::atomic::{AtomicBool, Ordering},
};

use salvo::{
    Scribe,
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation},
    prelude::{Json, Response},
};
use serde::Serialize;
use serde_json::error::Category;
use thiserror::Error;
use tracing::error;

/// Field name to validation messages.
pub(crate) type FieldErrors = BTreeMap<String, Vec<String>>;

static APP_DEBUG: AtomicBool = AtomicBool::new(false);

/// Expose internal error text in 500 responses.
pub(crate) fn set_debug(enabled: bool) {
    APP_DEBUG.store(enabled, Ordering::Relaxed);
}

/// An error response rendered as `{"success": false, "message": ...}`.
#[derive(Debug, Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
    errors: Option<FieldErrors>,
    available_stock: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,

    #[serde(skip_serializing_if = "Option::is_none")]
    available_stock: Option<u32>,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
            available_stock: None,
        }
    }

    pub(crate) fn validation(errors: FieldErrors) -> Self {
        Self {
            errors: Some(errors),
            ..Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation failed")
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub(crate) fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub(crate) fn insufficient_stock(available: u32) -> Self {
        Self {
            available_stock: Some(available),
            ..Self::unprocessable("Insufficient stock")
        }
    }

    pub(crate) fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// A bare status worded by its reason phrase.
    pub(crate) fn status(status: StatusCode) -> Self {
        Self::new(status, status.canonical_reason().unwrap_or("Error"))
    }

    /// A 422 for a body that is not JSON of the expected shape, reported under `body`.
    pub(crate) fn malformed_body(message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();

        errors.insert("body".to_string(), vec![message.into()]);

        Self::validation(errors)
    }

    /// Type mismatches keep serde's wording, which names the offending value.
    pub(crate) fn malformed_json(error: &serde_json::Error) -> Self {
        match error.classify() {
            Category::Data => Self::malformed_body(error.to_string()),
            Category::Io | Category::Syntax | Category::Eof => {
                Self::malformed_body("The request body must be valid JSON.")
            }
        }
    }

    /// A logged 500. The error text only reaches the client in debug mode.
    pub(crate) fn internal(context: &str, source: impl Display) -> Self {
        error!("{context}: {source}");

        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            internal_message(APP_DEBUG.load(Ordering::Relaxed), context, &source),
        )
    }
}

fn internal_message(debug: bool, context: &str, source: &impl Display) -> String {
    if debug {
        format!("{context}: {source}")
    } else {
        "Server Error".to_string()
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorEnvelope {
            success: false,
            message: self.message,
            errors: self.errors,
            available_stock: self.available_stock,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(_components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::UNAUTHORIZED, "Missing or invalid user identity"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Server Error"),
        ] {
            operation
                .responses
                .insert(status.as_str(), oapi::Response::new(description));
        }
    }
}
