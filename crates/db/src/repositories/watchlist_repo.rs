//! Repository for the `watchlist` table.

use sqlx::PgConnection;
use watchlist_core::types::{DbId, TmdbId};
use watchlist_core::watchlist::NewWatchlistEntry;

use crate::models::watchlist::WatchlistEntry;

/// Column list for `watchlist` queries.
const COLUMNS: &str = "\
    id, tmdb_id, media_type, title, original_title, overview, \
    poster_path, backdrop_path, vote_average, vote_count, release_date, \
    genres, runtime, number_of_seasons, number_of_episodes, created_at";

/// Name of the unique constraint on `watchlist.tmdb_id`.
pub const TMDB_ID_CONSTRAINT: &str = "uq_watchlist_tmdb_id";

/// Provides SQL access to watchlist entries.
pub struct WatchlistRepo;

impl WatchlistRepo {
    /// Whether an entry with the given TMDB id exists.
    pub async fn exists_by_tmdb_id(
        conn: &mut PgConnection,
        tmdb_id: TmdbId,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM watchlist WHERE tmdb_id = $1)")
                .bind(tmdb_id)
                .fetch_one(conn)
                .await?;
        Ok(exists)
    }

    /// Find an entry by its TMDB id.
    pub async fn find_by_tmdb_id(
        conn: &mut PgConnection,
        tmdb_id: TmdbId,
    ) -> Result<Option<WatchlistEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM watchlist WHERE tmdb_id = $1");
        sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(tmdb_id)
            .fetch_optional(conn)
            .await
    }

    /// Insert a new entry. `id` and `created_at` are assigned by the database.
    ///
    /// Fails with a unique violation on [`TMDB_ID_CONSTRAINT`] if the TMDB id
    /// is already present.
    pub async fn insert(
        conn: &mut PgConnection,
        entry: &NewWatchlistEntry,
    ) -> Result<WatchlistEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO watchlist \
                (tmdb_id, media_type, title, original_title, overview, \
                 poster_path, backdrop_path, vote_average, vote_count, release_date, \
                 genres, runtime, number_of_seasons, number_of_episodes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(entry.tmdb_id)
            .bind(entry.media_type)
            .bind(&entry.title)
            .bind(&entry.original_title)
            .bind(&entry.overview)
            .bind(&entry.poster_path)
            .bind(&entry.backdrop_path)
            .bind(entry.vote_average)
            .bind(entry.vote_count)
            .bind(&entry.release_date)
            .bind(&entry.genres)
            .bind(entry.runtime)
            .bind(entry.number_of_seasons)
            .bind(entry.number_of_episodes)
            .fetch_one(conn)
            .await
    }

    /// List all entries, most recently added first.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<WatchlistEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM watchlist ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, WatchlistEntry>(&query)
            .fetch_all(conn)
            .await
    }

    /// Delete the entry with the given TMDB id. Returns the deleted row's
    /// `id`, or `None` if no row matched.
    pub async fn delete_by_tmdb_id(
        conn: &mut PgConnection,
        tmdb_id: TmdbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("DELETE FROM watchlist WHERE tmdb_id = $1 RETURNING id")
                .bind(tmdb_id)
                .fetch_optional(conn)
                .await?;
        Ok(row.map(|(id,)| id))
    }
}
