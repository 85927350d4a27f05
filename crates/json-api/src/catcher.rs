//! Error envelope for responses that left the router without one.
//!
//! Unmatched routes, extractor failures and caught panics reach the service with a bare
//! status or a [`StatusError`] body. The hoop here renders them as [`ApiError`] so every
//! failure shares the same JSON shape.

use salvo::{
    catcher::Catcher,
    http::{ParseError, ResBody, StatusError},
    prelude::*,
};

use crate::errors::ApiError;

/// The service-level catcher.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(envelope)
}

#[handler]
async fn envelope(res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(status) = res.status_code else {
        return;
    };

    let error = match res.take_body() {
        ResBody::Error(error) => from_status_error(error),
        _ => from_status(status),
    };

    res.render(error);
    ctrl.skip_rest();
}

fn from_status(status: StatusCode) -> ApiError {
    if status.is_server_error() {
        ApiError::internal("request failed", status)
    } else {
        ApiError::status(status)
    }
}

fn from_status_error(error: StatusError) -> ApiError {
    let parse_error = error
        .cause
        .as_deref()
        .and_then(|cause| cause.downcast_ref::<ParseError>());

    match parse_error {
        Some(parse_error) => from_parse_error(parse_error),
        None if error.code.is_server_error() => {
            ApiError::internal("request failed", &error.brief)
        }
        None => ApiError::status(error.code),
    }
}

fn from_parse_error(error: &ParseError) -> ApiError {
    match error {
        ParseError::SerdeJson(json) => ApiError::malformed_json(json),
        ParseError::InvalidContentType => {
            ApiError::malformed_body("The request body must be JSON.")
        }
        ParseError::PayloadTooLarge => ApiError::status(StatusCode::PAYLOAD_TOO_LARGE),
        // Path parameters that overflow their integer type.
        ParseError::Other(_) => ApiError::status(StatusCode::NOT_FOUND),
        _ => ApiError::malformed_body("The request body could not be read."),
    }
}
