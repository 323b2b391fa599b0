//! Extractors whose rejections use the API error envelope.
//!
//! Axum's own `Path` and `Json` extractors reject with plain-text bodies and a mix of 400,
//! 415 and 422 statuses. These wrappers route every rejection through [`Error`] so a bad
//! path parameter or malformed body is a 400 with a JSON message.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::Error;

/// Path parameters, rejected as a 400 envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);

/// JSON request body, rejected as a 400 envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);
