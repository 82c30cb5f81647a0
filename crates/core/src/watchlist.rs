//! Watchlist entry input and validation.
//!
//! [`CreateWatchlistEntry`] is what clients send; it rejects unknown fields
//! at deserialization time. [`NewWatchlistEntry::from_request`] is the only
//! way to obtain a candidate the store will accept.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::TmdbId;

/// Maximum length of `title` and `original_title`.
pub const MAX_TITLE_LEN: u64 = 500;

/// Maximum length of `poster_path` and `backdrop_path`.
pub const MAX_IMAGE_PATH_LEN: u64 = 200;

/// Maximum length of `release_date`.
pub const MAX_RELEASE_DATE_LEN: u64 = 50;

/// Request payload for adding a movie or series to the watchlist.
///
/// `genres` is an opaque string (the client's JSON encoding of TMDB genres)
/// and is stored verbatim.
///
/// Beyond the column limits, the rules are stricter than what the storage
/// schema alone would allow: `tmdb_id` must be positive, `title` must not be
/// blank, count fields (`vote_count`, `runtime`, `number_of_seasons`,
/// `number_of_episodes`) must not be negative, and `vote_average` must be
/// finite. Any violation is a validation error.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateWatchlistEntry {
    #[validate(range(min = 1, message = "must be a positive TMDB id"))]
    pub tmdb_id: TmdbId,
    /// `true` for a movie, `false` for a TV series.
    pub media_type: bool,
    #[validate(length(min = 1, max = MAX_TITLE_LEN, message = "must be between 1 and 500 characters"))]
    pub title: String,
    #[validate(length(max = MAX_TITLE_LEN, message = "must be at most 500 characters"))]
    pub original_title: Option<String>,
    pub overview: Option<String>,
    #[validate(length(max = MAX_IMAGE_PATH_LEN, message = "must be at most 200 characters"))]
    pub poster_path: Option<String>,
    #[validate(length(max = MAX_IMAGE_PATH_LEN, message = "must be at most 200 characters"))]
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub vote_count: Option<i32>,
    #[validate(length(max = MAX_RELEASE_DATE_LEN, message = "must be at most 50 characters"))]
    pub release_date: Option<String>,
    pub genres: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub runtime: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub number_of_seasons: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub number_of_episodes: Option<i32>,
}

/// A validated watchlist entry, ready to be inserted.
///
/// Carries every column except `id` and `created_at`, which the store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWatchlistEntry {
    pub tmdb_id: TmdbId,
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
}

impl NewWatchlistEntry {
    /// Validate a request payload and map it onto a storable entry.
    pub fn from_request(input: CreateWatchlistEntry) -> Result<Self, CoreError> {
        input
            .validate()
            .map_err(|errors| CoreError::Validation(describe(&errors)))?;

        if input.title.trim().is_empty() {
            return Err(CoreError::Validation("title: must not be blank".into()));
        }

        if let Some(avg) = input.vote_average {
            if !avg.is_finite() {
                return Err(CoreError::Validation(
                    "vote_average: must be a finite number".into(),
                ));
            }
        }

        Ok(Self {
            tmdb_id: input.tmdb_id,
            media_type: input.media_type,
            title: input.title,
            original_title: input.original_title,
            overview: input.overview,
            poster_path: input.poster_path,
            backdrop_path: input.backdrop_path,
            vote_average: input.vote_average,
            vote_count: input.vote_count,
            release_date: input.release_date,
            genres: input.genres,
            runtime: input.runtime,
            number_of_seasons: input.number_of_seasons,
            number_of_episodes: input.number_of_episodes,
        })
    }

    /// Whether this entry is a movie (as opposed to a TV series).
    pub fn is_movie(&self) -> bool {
        self.media_type
    }
}

/// Flatten field errors into `"field: message"` pairs, sorted by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {msg}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
