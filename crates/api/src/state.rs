use watchlist_db::WatchlistStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; the store shares its connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Watchlist store (owns the database pool).
    pub store: WatchlistStore,
}
