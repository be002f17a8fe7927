//! Record store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a session's record store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Update referenced an id that is not in the collection.
    ///
    /// Deletion of unknown ids is a silent no-op; this asymmetry is
    /// intentional and must not be collapsed.
    #[error("record not found: {0}")]
    NotFound(i64),

    /// A mutation payload carried no usable `id` field
    #[error("record is missing an integer id")]
    MissingId,
}
