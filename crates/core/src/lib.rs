//! Domain types and validation for the watchlist service.
//!
//! This crate has no I/O. It defines the shared ID/timestamp aliases, the
//! domain error type, and the transport input for new watchlist entries
//! together with the function that validates it.

pub mod error;
pub mod types;
pub mod watchlist;
