//! Route definitions for the watchlist.

use axum::routing::get;
use axum::Router;

use crate::handlers::watchlist;
use crate::state::AppState;

/// Watchlist routes mounted at `/api/watchlist`.
///
/// ```text
/// GET    /            -> list_entries
/// POST   /            -> add_entry
/// GET    /{tmdb_id}   -> check_entry
/// DELETE /{tmdb_id}   -> remove_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(watchlist::list_entries).post(watchlist::add_entry))
        .route(
            "/{tmdb_id}",
            get(watchlist::check_entry).delete(watchlist::remove_entry),
        )
}
