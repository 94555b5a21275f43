// coursehub/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failure raised by a store adapter (connectivity or an unexpected backend error).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store operation failed. Source: {source}")]
    Backend {
        #[source]
        source: AnyhowError,
    },
}

impl StoreError {
    /// Wraps any backend error (sqlx, io, ...) as `StoreError::Backend`.
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<AnyhowError>,
    {
        StoreError::Backend { source: err.into() }
    }
}

/// Errors produced by the course repository and the enrollment service.
///
/// The string carried by the first four variants is the human-readable message
/// returned to API clients.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required field is missing or empty.
    #[error("{0}")]
    Validation(String),

    /// An identifier could not be parsed into a `RecordId`.
    #[error("{0}")]
    InvalidId(String),

    #[error("{0}")]
    NotFound(String),

    /// The record would violate a uniqueness rule (duplicate enrollment).
    #[error("{0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
