//! Responses for requests that match no registered route.

use axum::http::{Method, StatusCode, Uri};

use crate::server::error::api::ApiError;

/// Responds 404 with the error envelope for a path that has no route.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

/// Responds 405 with the error envelope for a known path requested with the wrong method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::new(format!("Method {} not allowed for {}", method, uri.path()))
        .with_status(StatusCode::METHOD_NOT_ALLOWED)
}
