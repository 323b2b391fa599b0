//! Errors raised deliberately by application code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Error raised deliberately by application code.
///
/// Carries the message shown to the client and the status code to respond with,
/// which defaults to 400 Bad Request.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ApiError {
    /// Message returned in the error envelope.
    pub message: String,
    /// Status code of the response.
    pub status: StatusCode,
}

impl ApiError {
    /// Creates a 400 Bad Request error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    /// Replaces the status code of the error.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Creates a 404 Not Found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::NOT_FOUND)
    }

    /// Creates a 400 error for a required body field that is absent or blank.
    pub fn missing_field(field: &str) -> Self {
        Self::new(format!("Missing required field: {field}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, "{}", self.message);

        (self.status, Json(ErrorDto::new(self.message))).into_response()
    }
}
