//! HTTP mapping of service errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use field_common::FieldError;
use thiserror::Error;

/// A [`FieldError`] returned from a handler.
///
/// Clients only see the status code and a generic message; details go to the
/// log.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub FieldError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        tracing::error!(error = %self.0, status = status.as_u16(), "Request failed");

        let message = status.canonical_reason().unwrap_or("Error");
        (status, message).into_response()
    }
}
