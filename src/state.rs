use crate::db::DbPool;

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub db_pool: DbPool,
}

impl AppState {
    /// Create a new AppState instance
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }
}
