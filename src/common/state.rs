use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;

/// Shared per-request state. The database handle is constructed and injected
/// at startup so tests can substitute a scoped connection instead of a
/// process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
