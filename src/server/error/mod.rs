//! Error types for the multiverse server.
//!
//! Handlers return `Result<_, Error>`; the `IntoResponse` implementations here are the single
//! boundary where failures become HTTP responses. Every error response carries the
//! [`ErrorDto`] envelope `{ "message": ..., "error": true }`.

pub mod api;
pub mod config;
pub mod db;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{api::ApiError, config::ConfigError, db::DbErrResponse},
};

/// Main error type for the multiverse server.
///
/// Aggregates the declared application errors and external library errors into a single
/// type so handlers can use `?` throughout.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Declared application error with its own message and status code.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(format!("Invalid JSON body: {}", rejection.body_text())).into()
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        ApiError::new(format!("Invalid path parameter: {}", rejection.body_text())).into()
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - The status carried by an [`ApiError`] (400 by default, 404 for missing records)
/// - 409 Conflict - Unique or foreign key constraint violated by a write
/// - 503 Service Unavailable - The database could not be reached
/// - 500 Internal Server Error - For all other errors, configuration included (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ApiError(err) => err.into_response(),
            Self::DbErr(err) => DbErrResponse(err).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
