//! Shared application state.

use sea_orm::DatabaseConnection;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Pooled database connection.
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
