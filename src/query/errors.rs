//! Query descriptor error types

use thiserror::Error;

/// Result type for descriptor parsing
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while parsing sort/filter descriptors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The `sort` query parameter was not a valid JSON descriptor array
    #[error("malformed sort descriptor: {0}")]
    MalformedSort(String),

    /// The `filter` query parameter was not a valid JSON descriptor array
    #[error("malformed filter descriptor: {0}")]
    MalformedFilter(String),

    /// Filter operator outside the supported set (`*`, `=`, `<`, `>`)
    #[error("unsupported filter operator: {0:?}")]
    UnsupportedOperator(String),
}
