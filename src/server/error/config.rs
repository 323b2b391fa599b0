//! Configuration errors.

use thiserror::Error;

/// Invalid process configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable is set to a value that can't be used.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}
