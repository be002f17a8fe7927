//! Session lifecycle
//!
//! Opaque tokens map to per-session working datasets with a sliding
//! 2-hour expiry; eviction runs opportunistically on every access.

pub mod errors;
pub mod registry;
pub mod seed;

pub use errors::{SessionError, SessionResult};
pub use registry::{SessionRegistry, SharedStore, DEFAULT_TTL_SECS};
pub use seed::load_template;
