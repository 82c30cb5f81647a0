pub mod health;
pub mod watchlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /watchlist               list, add
/// /watchlist/{tmdb_id}     check, remove
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/watchlist", watchlist::router())
}
