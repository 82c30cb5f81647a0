//! The watchlist store.
//!
//! [`WatchlistStore`] owns the pool and is the single source of truth for
//! existence and uniqueness of entries. Each operation runs on its own pooled
//! connection or transaction, which is released (and, for transactions,
//! rolled back unless committed) on every exit path.

use watchlist_core::types::TmdbId;
use watchlist_core::watchlist::NewWatchlistEntry;

use crate::error::{is_tmdb_id_violation, StoreError};
use crate::models::watchlist::WatchlistEntry;
use crate::repositories::WatchlistRepo;
use crate::DbPool;

/// Add, list, check and remove watchlist entries.
///
/// Cheap to clone; clones share the underlying pool.
#[derive(Debug, Clone)]
pub struct WatchlistStore {
    pool: DbPool,
}

impl WatchlistStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Persist a new entry and return it with its assigned `id` and
    /// `created_at`.
    ///
    /// The existence check only produces an early [`StoreError::DuplicateKey`];
    /// the unique constraint decides races between concurrent adds, and its
    /// violation is reported as the same error.
    pub async fn add(&self, entry: &NewWatchlistEntry) -> Result<WatchlistEntry, StoreError> {
        let mut tx = self.pool.begin().await?;

        if WatchlistRepo::exists_by_tmdb_id(&mut *tx, entry.tmdb_id).await? {
            tracing::warn!(tmdb_id = entry.tmdb_id, "Rejected duplicate watchlist entry");
            return Err(StoreError::DuplicateKey {
                tmdb_id: entry.tmdb_id,
            });
        }

        let created = match WatchlistRepo::insert(&mut *tx, entry).await {
            Ok(row) => row,
            Err(err) if is_tmdb_id_violation(&err) => {
                tracing::warn!(
                    tmdb_id = entry.tmdb_id,
                    "Concurrent insert won the race for watchlist entry",
                );
                return Err(StoreError::DuplicateKey {
                    tmdb_id: entry.tmdb_id,
                });
            }
            Err(err) => {
                tracing::debug!(tmdb_id = entry.tmdb_id, error = %err, "Watchlist insert failed");
                return Err(err.into());
            }
        };

        tx.commit().await?;
        Ok(created)
    }

    /// All entries, most recently added first.
    pub async fn list(&self) -> Result<Vec<WatchlistEntry>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Ok(WatchlistRepo::list_all(&mut *conn).await?)
    }

    /// Whether an entry with this TMDB id is on the watchlist.
    pub async fn exists(&self, tmdb_id: TmdbId) -> Result<bool, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Ok(WatchlistRepo::exists_by_tmdb_id(&mut *conn, tmdb_id).await?)
    }

    /// The entry with this TMDB id, if any.
    pub async fn find(&self, tmdb_id: TmdbId) -> Result<Option<WatchlistEntry>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Ok(WatchlistRepo::find_by_tmdb_id(&mut *conn, tmdb_id).await?)
    }

    /// Delete the entry with this TMDB id.
    ///
    /// Not idempotent: removing an absent entry is [`StoreError::NotFound`].
    pub async fn remove(&self, tmdb_id: TmdbId) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let Some(id) = WatchlistRepo::delete_by_tmdb_id(&mut *tx, tmdb_id).await? else {
            return Err(StoreError::NotFound { tmdb_id });
        };

        tx.commit().await?;
        tracing::debug!(id, tmdb_id, "Watchlist entry deleted");
        Ok(())
    }
}
