//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus any response DTOs derived from it. Request DTOs
//! live in `watchlist_core` so they can be validated without a database.

pub mod watchlist;
