//! Handlers for the watchlist endpoints.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use watchlist_core::types::TmdbId;
use watchlist_core::watchlist::{CreateWatchlistEntry, NewWatchlistEntry};
use watchlist_db::models::watchlist::WatchlistCheck;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/watchlist
///
/// Add a movie or series. Returns 201 with the stored entry, or 400 if the
/// body is malformed, fails validation, or the TMDB id is already on the
/// watchlist.
pub async fn add_entry(
    State(state): State<AppState>,
    payload: Result<Json<CreateWatchlistEntry>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let entry = NewWatchlistEntry::from_request(input)?;
    let created = state.store.add(&entry).await?;

    let media = if entry.is_movie() { "movie" } else { "series" };
    tracing::info!(
        id = created.id,
        tmdb_id = created.tmdb_id,
        media,
        "Watchlist entry added",
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/watchlist
///
/// List every entry, most recently added first.
pub async fn list_entries(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = state.store.list().await?;
    Ok(Json(entries))
}

/// GET /api/watchlist/{tmdb_id}
pub async fn check_entry(
    State(state): State<AppState>,
    path: Result<Path<TmdbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(tmdb_id) = path?;
    let in_watchlist = state.store.exists(tmdb_id).await?;
    Ok(Json(WatchlistCheck { in_watchlist }))
}

/// DELETE /api/watchlist/{tmdb_id}
///
/// Returns 204 on success, 404 if the entry is absent, and 400 if the id is
/// not an integer.
pub async fn remove_entry(
    State(state): State<AppState>,
    path: Result<Path<TmdbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(tmdb_id) = path?;
    state.store.remove(tmdb_id).await?;

    tracing::info!(tmdb_id, "Watchlist entry removed");

    Ok(StatusCode::NO_CONTENT)
}
