//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

const DEFAULT_PORT: u16 = 3000;

/// Server settings read from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string selecting the backing database (`DB_CONNECTION_STRING`).
    pub database_url: String,
    /// Port the HTTP server binds to (`PORT`, defaults to 3000).
    pub port: u16,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DB_CONNECTION_STRING` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = var("DB_CONNECTION_STRING")
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DB_CONNECTION_STRING".to_string()))?;

        let port = match var("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("{value:?} is not a valid port number"),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}
