//! Shared application state.

use database::postgres::DatabaseConnection;

/// Cloned into stateful routers; the connection is a pooled handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
