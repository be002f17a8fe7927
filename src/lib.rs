//! gridstore - session-scoped in-memory record store over HTTP
//!
//! Each session owns a volatile copy of a seed dataset; queries apply
//! declarative sort/filter descriptors with pagination, and mutations keep
//! the copy consistent for the session's 2-hour sliding lifetime.

pub mod cli;
pub mod http;
pub mod observability;
pub mod query;
pub mod session;
pub mod store;
