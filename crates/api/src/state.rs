/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: persons_db::DbPool,
}

impl AppState {
    pub fn new(pool: persons_db::DbPool) -> Self {
        Self { pool }
    }
}
