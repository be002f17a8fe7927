//! Session subsystem error types

use thiserror::Error;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised while preparing session state
#[derive(Debug, Error)]
pub enum SessionError {
    /// Seed dataset file could not be read
    #[error("failed to read seed dataset {path}: {source}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Seed dataset file is not a JSON array of records
    #[error("failed to parse seed dataset {path}: {source}")]
    SeedParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
