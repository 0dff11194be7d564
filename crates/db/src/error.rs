//! Typed error type for the db crate.

use thiserror::Error;

/// Outcome of a failed repository call.
///
/// `NotFound` is the only condition that is classified; everything else the
/// driver reports is passed through untouched.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("row not found")]
    NotFound,

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
