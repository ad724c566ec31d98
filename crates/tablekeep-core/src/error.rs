//! Error types for all TableKeep operations.
//!
//! Catalog-logic outcomes (not-found, conflict, validation) are not errors:
//! they are reported as [`crate::types::StatusCode`] values. The types here
//! cover the failures that must propagate to the caller — store/transport
//! failures and corrupt persisted records.

use thiserror::Error;

/// Top-level error type for TableKeep operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Failures signalled by the underlying key-value store.
///
/// These are retryable from the catalog's point of view: a failed commit
/// leaves previously committed batches durable, and re-invoking the same
/// operation is safe because schema records are content-addressed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transaction exceeds operation limit: {actual} > {limit}")]
    TransactionTooLarge { limit: usize, actual: usize },

    #[error("transaction aborted: {0}")]
    Aborted(String),
}

/// Failures decoding persisted schema records.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("invalid attribute type tag: {0:#04x}")]
    InvalidTypeTag(u8),

    #[error("malformed composite key")]
    MalformedKey,

    #[error("malformed flag value")]
    MalformedValue,
}

pub type Result<T> = std::result::Result<T, Error>;
