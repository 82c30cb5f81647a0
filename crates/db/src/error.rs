use watchlist_core::types::TmdbId;

use crate::repositories::watchlist_repo::TMDB_ID_CONSTRAINT;

/// Errors returned by [`crate::WatchlistStore`].
///
/// Every failing mutation leaves the `watchlist` table as it was before the
/// call; the transaction is rolled back before the error is returned.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An entry with this TMDB id is already on the watchlist.
    #[error("Watchlist entry with tmdb_id {tmdb_id} already exists")]
    DuplicateKey { tmdb_id: TmdbId },

    /// No entry with this TMDB id is on the watchlist.
    #[error("Watchlist entry with tmdb_id {tmdb_id} not found")]
    NotFound { tmdb_id: TmdbId },

    /// Any failure of the underlying database.
    #[error("Storage fault: {0}")]
    StorageFault(#[from] sqlx::Error),
}

/// Whether `err` is a unique violation of the `tmdb_id` constraint.
pub(crate) fn is_tmdb_id_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation() && db_err.constraint() == Some(TMDB_ID_CONSTRAINT)
        }
        _ => false,
    }
}
