//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async SQL functions that
//! accept `&mut PgConnection`, so callers can run them on a pooled connection
//! or inside a transaction.

pub mod watchlist_repo;

pub use watchlist_repo::WatchlistRepo;
