//! CLI error types
//!
//! Every CLI error is fatal: the process prints it and exits non-zero.

use thiserror::Error;

use crate::http::ConfigError;
use crate::session::SessionError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Seed dataset could not be prepared
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// Runtime or server I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
