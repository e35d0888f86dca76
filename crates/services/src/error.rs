//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `HabitsApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("invalid API base url {raw:?}")]
    InvalidBaseUrl { raw: String },
    #[error("invalid API timeout {raw:?}")]
    InvalidTimeout { raw: String },
    #[error("habits API request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("habits API unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `HabitDayService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HabitDayError {
    #[error("habits of a past day cannot be edited")]
    ReadOnlyDay,
    #[error(transparent)]
    Api(#[from] ApiError),
}
