//! Database error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Maps a database error onto the HTTP status it represents.
///
/// Constraint violations are the caller's fault and become 409, lost connectivity becomes
/// 503; everything else is an internal error.
pub struct DbErrResponse(pub DbErr);

impl IntoResponse for DbErrResponse {
    fn into_response(self) -> Response {
        let err = self.0;

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!("Unique constraint violation: {}", detail);

                return (
                    StatusCode::CONFLICT,
                    Json(ErrorDto::new("A record with the same unique value already exists")),
                )
                    .into_response();
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::debug!("Foreign key constraint violation: {}", detail);

                return (
                    StatusCode::CONFLICT,
                    Json(ErrorDto::new("The record references a record that does not exist")),
                )
                    .into_response();
            }
            _ => {}
        }

        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                tracing::error!("Database unavailable: {}", err);

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto::new("Database unavailable, please try again later")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
