//! Application state shared with the HTTP handlers.

use sea_orm::DatabaseConnection;

/// Shared state handed to every HTTP handler
#[derive(Clone)]
pub struct AppState {
    /// Record store connection
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
