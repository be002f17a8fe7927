//! HTTP layer
//!
//! Translates the wire protocol into calls against the session registry,
//! query engine, and record store.

pub mod config;
pub mod cookie;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult};
pub use routes::{grid_routes, AppState};
pub use server::GridServer;
