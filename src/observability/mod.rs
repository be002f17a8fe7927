//! Observability
//!
//! Structured JSON logging for server and session lifecycle events.
//! Observability is read-only: a logging failure never affects a request.

mod logger;

pub use logger::{Logger, Severity};
