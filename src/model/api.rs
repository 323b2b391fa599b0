use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
    /// Always `true`, distinguishes error bodies from success payloads
    pub error: bool,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: true,
        }
    }
}

/// Confirmation returned by operations without a payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}
