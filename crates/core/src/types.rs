/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// External media identifier assigned by TMDB.
pub type TmdbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
