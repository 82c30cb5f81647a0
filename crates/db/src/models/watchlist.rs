//! Watchlist entry model and response DTOs.

use serde::Serialize;
use sqlx::FromRow;
use watchlist_core::types::{DbId, Timestamp, TmdbId};

/// A row from the `watchlist` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WatchlistEntry {
    pub id: DbId,
    pub tmdb_id: TmdbId,
    /// `true` for a movie, `false` for a TV series.
    pub media_type: bool,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,
    pub release_date: Option<String>,
    pub genres: Option<String>,
    pub runtime: Option<i32>,
    pub number_of_seasons: Option<i32>,
    pub number_of_episodes: Option<i32>,
    pub created_at: Timestamp,
}

/// Response for `GET /api/watchlist/{tmdb_id}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WatchlistCheck {
    pub in_watchlist: bool,
}
